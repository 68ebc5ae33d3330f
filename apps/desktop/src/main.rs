#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use mfx_desktop::{DesktopApp, HostConfig};
use mfx_logger::Logger;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // Optional first argument: config file path (defaults to `site.toml` in the working directory).
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    let (config, rejected) = HostConfig::load_or_default(config_path.as_deref());
    let _logger = Logger::from_settings(env!("CARGO_PKG_NAME"), &config.log)
        .context("Failed to initialize logging")?;

    if let Some(e) = rejected {
        warn!("Config rejected, using defaults: {e}");
    }
    info!(brand = %config.site.brand.name, has_file_log = config.log.directory.is_some(), "Config loaded");

    DesktopApp::new()
        .with_site(config.site)
        .with_size(config.window.width, config.window.height)
        .launch(mfx_ui::App);

    Ok(())
}
