use super::background;
use super::icons::SocialLinks;
use dioxus::prelude::*;
use mfx::domain::config::SiteConfig;
use mfx::domain::constants::SECTION_HOME;

const LOGO_FULL: &str = "/images/logos/logo-full-light.png";

#[component]
pub(crate) fn Hero() -> Element {
    let site = use_context::<SiteConfig>();

    rsx! {
        section {
            id: SECTION_HOME,
            class: "section hero",
            style: background("/images/background/background-1.png"),
            div { class: "page-container hero-inner reveal",
                img {
                    class: "hero-logo",
                    src: LOGO_FULL,
                    alt: "Logo {site.brand.name}",
                    width: "1000",
                    height: "300",
                }
                p { class: "hero-tagline", "{site.brand.tagline}" }
                SocialLinks { class: "hero-social" }
            }
        }
    }
}
