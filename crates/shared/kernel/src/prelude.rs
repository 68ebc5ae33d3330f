#[cfg(not(target_arch = "wasm32"))]
pub use crate::config::{ConfigError, ConfigLoader, load_config, load_optional_config};
pub use mfx_domain::config::{BrandConfig, MessagingConfig, SiteConfig, SocialConfig};
