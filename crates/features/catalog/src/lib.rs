//! Static content of the site: the equipment catalog with its tab selection state,
//! the portfolio grid and the "about us" copy.
//!
//! Everything here is authored at build time and read-only at runtime.
//!
//! ```rust
//! use mfx_catalog::{EquipmentTabs, equipment};
//!
//! let mut tabs = EquipmentTabs::new();
//! assert_eq!(tabs.active().id, equipment()[0].id);
//! tabs.select("laser").unwrap();
//! assert!(tabs.is_active("laser"));
//! ```

mod about;
mod equipment;
mod error;
mod portfolio;

pub use crate::about::about;
pub use crate::equipment::{EquipmentTabs, equipment, find};
pub use crate::error::CatalogError;
pub use crate::portfolio::portfolio;
pub use mfx_domain::catalog::{AboutContent, CardFlags, EquipmentCategory, PortfolioItem};
