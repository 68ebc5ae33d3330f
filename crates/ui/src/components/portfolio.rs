use super::background;
use super::icons::CheckCircleIcon;
use dioxus::prelude::*;
use mfx::domain::constants::SECTION_PORTFOLIO;
use mfx::features::catalog::{PortfolioItem, portfolio};

#[component]
pub(crate) fn Portfolio() -> Element {
    rsx! {
        section {
            id: SECTION_PORTFOLIO,
            class: "section portfolio",
            style: background("/images/background/background-5.png"),
            div { class: "page-container reveal",
                div { class: "section-heading",
                    div {
                        h2 { class: "section-title",
                            "Portfólio de "
                            span { class: "accent", "Eventos Inesquecíveis" }
                        }
                        p { class: "section-lead",
                            "Alguns registros de produções que contaram com o time MaguilaFX para elevar o impacto visual do espetáculo."
                        }
                    }
                    div { class: "section-note",
                        CheckCircleIcon {}
                        span { "Imagens reais do nosso trabalho" }
                    }
                }
                div { class: "portfolio-grid",
                    for item in portfolio() {
                        PortfolioCard { key: "{item.image}", item: *item }
                    }
                }
            }
        }
    }
}

#[component]
fn PortfolioCard(item: PortfolioItem) -> Element {
    rsx! {
        article { class: if item.is_featured() { "portfolio-card is-featured" } else { "portfolio-card" },
            div { class: "portfolio-media",
                img {
                    src: item.image,
                    alt: item.alt,
                    "loading": if item.is_priority() { "eager" } else { "lazy" },
                }
                div { class: "portfolio-overlay" }
            }
            div { class: "portfolio-copy",
                h3 { "{item.title}" }
                p { "{item.description}" }
            }
        }
    }
}
