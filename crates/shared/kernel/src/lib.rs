//! Kernel utilities shared by the site hosts.
//! Keep this crate lightweight; today it only owns layered config loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! # #[cfg(not(target_arch = "wasm32"))]
//! # {
//! use mfx_kernel::config::load_optional_config;
//! use mfx_kernel::domain::config::SiteConfig;
//!
//! let site: SiteConfig = load_optional_config(Some("site")).unwrap_or_default();
//! println!("{}", site.brand.name);
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod prelude;

pub use mfx_domain as domain;
