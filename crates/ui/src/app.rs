use crate::components::{About, Contact, Equipment, Footer, Header, Hero, Portfolio};
use dioxus::prelude::*;
use mfx::domain::config::SiteConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component. Uses the host-provided [`SiteConfig`] when present, the defaults otherwise.
#[component]
pub fn App() -> Element {
    let site = use_hook(|| try_consume_context::<SiteConfig>().unwrap_or_default());
    use_context_provider(|| site.clone());

    let title = format!("{} | Efeitos Pirotécnicos", site.brand.name);

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{site.brand.tagline}" }
        document::Stylesheet { href: MAIN_CSS }

        Header {}
        main { class: "page",
            Hero {}
            Equipment {}
            Portfolio {}
            section { class: "section section-split",
                div { class: "page-container split-grid",
                    About {}
                    Contact {}
                }
            }
        }
        Footer {}
    }
}
