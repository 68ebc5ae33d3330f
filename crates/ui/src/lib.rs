//! # Site UI
//!
//! Dioxus components for the one-page site. Hosts launch [`App`]; an optional
//! [`SiteConfig`](mfx::domain::config::SiteConfig) provided as a root context overrides
//! the built-in defaults.
//!
//! Components only read static content and delegate every decision to the feature crates:
//! tab selection to `mfx::features::catalog`, form handling to `mfx::features::contact`.

mod app;
mod components;
mod navigation;
mod state;

pub use crate::app::App;
pub use crate::state::{HeaderState, SCROLL_THRESHOLD};
