use super::icons::{ShieldIcon, StarIcon};
use dioxus::prelude::*;
use mfx::domain::config::SiteConfig;
use mfx::domain::constants::SECTION_ABOUT;
use mfx::features::catalog::about;

#[component]
pub(crate) fn About() -> Element {
    let site = use_context::<SiteConfig>();
    let content = about();

    rsx! {
        div { id: SECTION_ABOUT, class: "about reveal",
            div { class: "about-copy",
                div { class: "badge-top",
                    StarIcon {}
                    span { "{content.badge}" }
                }
                h2 { class: "section-title",
                    "Quem é a "
                    span { class: "accent", "{site.brand.name}" }
                    "?"
                }
                for paragraph in content.paragraphs {
                    p { key: "{paragraph}", class: "section-lead", "{paragraph}" }
                }
                div { class: "about-lists",
                    BulletList { title: "Especialidades", items: content.specialties }
                    BulletList { title: "Diferenciais", items: content.differentials }
                }
            }

            div { class: "about-media",
                img { src: content.image, alt: "Time {site.brand.name} posicionado" }
                div { class: "certification",
                    div { class: "certification-icon", ShieldIcon {} }
                    div {
                        h4 { "Certificação Blaster Pirotécnico" }
                        p { "{content.certification}" }
                    }
                }
            }
        }
    }
}

#[component]
fn BulletList(title: &'static str, items: &'static [&'static str]) -> Element {
    rsx! {
        div { class: "bullet-list",
            p { class: "list-title", "{title}" }
            ul {
                for item in items {
                    li { key: "{item}", "• {item}" }
                }
            }
        }
    }
}
