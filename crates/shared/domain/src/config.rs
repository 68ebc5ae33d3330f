use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level site configuration shared by the hosts and the UI.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub brand: BrandConfig,
    pub messaging: MessagingConfig,
    pub social: SocialConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into UI contexts.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Company identity used in copy and in the outbound message greeting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub tagline: String,
}

/// Messaging deep-link target for quote requests.
///
/// The final link has the shape `<base_url>/<recipient>?text=<message>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    pub base_url: String,
    pub recipient: String,
}

/// Public profile links rendered in the hero and the footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub whatsapp: String,
    pub instagram: String,
}

// --- Default ---

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "MaguilaFX".to_owned(),
            tagline: "Produção de efeitos pirotécnicos para shows, festivais, casamentos, chá revelação e grandes eventos".to_owned(),
        }
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self { base_url: "https://wa.me".to_owned(), recipient: "556392154511".to_owned() }
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            whatsapp: "https://wa.me/556392252302".to_owned(),
            instagram: "https://instagram.com/maguilafx".to_owned(),
        }
    }
}
