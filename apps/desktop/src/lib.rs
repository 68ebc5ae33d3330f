use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use mfx::domain::config::SiteConfig;
use mfx::kernel::config::{ConfigError, load_optional_config};
use mfx_logger::LogSettings;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Everything the desktop host reads from its config file: the [`SiteConfig`] tables plus
/// the host-only `[log]` and `[window]` tables.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    #[serde(flatten)]
    pub site: SiteConfig,
    pub log: LogSettings,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self { width: 1280.0, height: 860.0 }
    }
}

impl HostConfig {
    /// Reads the site and host settings in one pass; a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file exists but does not match the expected shape.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_optional_config(path)
    }

    /// Like [`HostConfig::load`], but a rejected file falls back to the defaults.
    ///
    /// The error is handed back so it can be reported once logging is up.
    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<ConfigError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    site: SiteConfig,
}

impl Default for DesktopApp {
    fn default() -> Self {
        let window = WindowSettings::default();
        Self {
            title: "MaguilaFX | Efeitos Pirotécnicos".to_owned(),
            width: window.width,
            height: window.height,
            site: SiteConfig::default(),
        }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Site config handed to the UI as a root context. The window title follows the brand name.
    #[must_use]
    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.title = format!("{} | Efeitos Pirotécnicos", site.brand.name);
        self.site = site;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self, root: fn() -> Element) {
        info!(title = %self.title, width = self.width, height = self.height, "Launching desktop window");

        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).with_context(self.site).launch(root);
    }
}
