use super::icons::SocialLinks;
use chrono::Datelike;
use dioxus::prelude::*;
use mfx::domain::config::SiteConfig;
use mfx::domain::constants::FOOTER_NAV;

#[component]
pub(crate) fn Footer() -> Element {
    let site = use_context::<SiteConfig>();
    let year = use_hook(|| chrono::Local::now().year());

    rsx! {
        footer { class: "site-footer",
            div { class: "page-container footer-grid",
                div { class: "footer-brand",
                    img {
                        src: "/images/logos/logo-full-light.png",
                        alt: "{site.brand.name}",
                        width: "160",
                        height: "50",
                    }
                    p {
                        "Transformando eventos em experiências visuais inesquecíveis com pirotecnia e efeitos especiais de alto nível."
                    }
                }
                div {
                    h4 { class: "footer-title", "Navegação" }
                    ul { class: "footer-nav",
                        for item in FOOTER_NAV {
                            li { key: "{item.anchor}",
                                a { href: item.href(), "{item.label}" }
                            }
                        }
                    }
                }
                div {
                    h4 { class: "footer-title", "Conecte-se" }
                    SocialLinks { class: "footer-social" }
                }
            }
            div { class: "page-container footer-bottom",
                p { "© {year} {site.brand.name}. Todos os direitos reservados." }
                p { "Desenvolvido com tecnologia e paixão." }
            }
        }
    }
}
