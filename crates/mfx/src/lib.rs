//! Facade crate for the `MaguilaFX` site.
//! Re-exports domain/kernel primitives and the content and contact features.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Depend on `mfx` from the UI and the hosts instead of the individual crates.
//! - Content lives in [`features::catalog`], the quote request flow in [`features::contact`].

pub use mfx_domain as domain;
pub use mfx_kernel as kernel;

/// Feature slices of the site.
pub mod features {
    pub use mfx_catalog as catalog;
    pub use mfx_contact as contact;
}
