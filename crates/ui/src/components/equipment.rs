use super::background;
use dioxus::prelude::*;
use mfx::domain::constants::SECTION_EQUIPMENT;
use mfx::features::catalog::{EquipmentTabs, equipment};
use tracing::warn;

/// Tabbed equipment catalog. Exactly one category is shown at a time.
#[component]
pub(crate) fn Equipment() -> Element {
    let mut tabs = use_signal(EquipmentTabs::new);
    let active = tabs.read().active();

    rsx! {
        section {
            id: SECTION_EQUIPMENT,
            class: "section equipment",
            style: background("/images/background/background-2.png"),

            // Warms the image cache so switching tabs does not flash.
            div { class: "preload", "aria-hidden": "true",
                for category in equipment() {
                    img { key: "{category.id}", src: category.image, alt: "", width: "1", height: "1" }
                }
            }

            div { class: "page-container reveal",
                div { class: "section-heading",
                    div {
                        h2 { class: "section-title",
                            "Nossos "
                            span { class: "accent", "Equipamentos" }
                        }
                        p { class: "section-lead",
                            "Utilizamos tecnologia de ponta para garantir segurança e o máximo impacto visual. Conheça as máquinas que fazem a mágica acontecer."
                        }
                    }
                    div { class: "section-aside",
                        p { class: "aside-title", "Equipamentos próprios e revisados" }
                        p { "Segurança e performance garantidas." }
                    }
                }

                div { class: "equipment-layout",
                    div { class: "equipment-tabs", role: "tablist",
                        for category in equipment() {
                            button {
                                key: "{category.id}",
                                r#type: "button",
                                role: "tab",
                                class: if tabs.read().is_active(category.id) { "tab is-active" } else { "tab" },
                                "aria-selected": if tabs.read().is_active(category.id) { "true" } else { "false" },
                                onclick: move |_| {
                                    if let Err(e) = tabs.write().select(category.id) {
                                        warn!("Tab not switched: {e}");
                                    }
                                },
                                span { class: "tab-label", "{category.label}" }
                            }
                        }
                    }

                    div { class: "equipment-panel", role: "tabpanel",
                        div { class: "equipment-media",
                            img { src: active.image, alt: active.title }
                            span { class: "badge", "Profissional" }
                        }
                        div { class: "equipment-info",
                            h3 { class: "panel-title", "{active.title}" }
                            p { class: "panel-text", "{active.description}" }
                            p { class: "specs-title", "Especificações Técnicas" }
                            ul { class: "specs",
                                for spec in active.specs {
                                    li { key: "{spec}", span { class: "spec-dot" } "{spec}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
