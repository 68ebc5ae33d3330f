use crate::navigation::SCROLL_REPORTER;
use crate::state::HeaderState;
use dioxus::prelude::*;
use mfx::domain::config::SiteConfig;
use mfx::domain::constants::{HEADER_NAV, SECTION_HOME};
use tracing::debug;

const LOGO_MINI: &str = "/images/logos/logo-mini-light.png";

/// Fixed header with in-page navigation and a collapsible mobile menu.
#[component]
pub(crate) fn Header() -> Element {
    let site = use_context::<SiteConfig>();
    let mut header = use_signal(HeaderState::default);

    use_future(move || async move {
        let mut scroll = document::eval(SCROLL_REPORTER);
        while let Ok(offset) = scroll.recv::<f64>().await {
            header.write().on_scroll(offset);
        }
        debug!("Scroll reporter closed");
    });

    let state = header();
    let home = format!("#{SECTION_HOME}");

    rsx! {
        header { class: state.class(),
            div { class: "page-container header-bar",
                a { class: "brand", href: "{home}",
                    img { src: LOGO_MINI, alt: "{site.brand.name}", width: "40", height: "40" }
                    span { class: "brand-name", "{site.brand.name}" }
                }

                nav { class: "nav-desktop",
                    for item in HEADER_NAV {
                        a { key: "{item.anchor}", class: "nav-link", href: item.href(), "{item.label}" }
                    }
                }

                button {
                    r#type: "button",
                    class: state.toggle_class(),
                    "aria-label": "Abrir menu",
                    "aria-expanded": if state.is_menu_open() { "true" } else { "false" },
                    onclick: move |_| header.write().toggle_menu(),
                    span { class: "menu-bar" }
                    span { class: "menu-bar" }
                    span { class: "menu-bar" }
                }
            }

            if state.is_menu_open() {
                nav { class: "nav-mobile",
                    for item in HEADER_NAV {
                        a {
                            key: "{item.anchor}",
                            class: "nav-link",
                            href: item.href(),
                            onclick: move |_| header.write().close_menu(),
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
