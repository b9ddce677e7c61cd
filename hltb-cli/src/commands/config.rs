use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{self, Settings};

/// Show the settings file location and the effective settings.
pub(crate) fn run_config_show(settings: &Settings, db_path: &Path) {
    let path = settings::settings_path();

    log::info!("{}", "hltb Configuration".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("  Database:      {}", db_path.display());
    crate::log_blank();

    match toml::to_string_pretty(settings) {
        Ok(text) => {
            for line in text.lines() {
                log::info!("  {}", line);
            }
        }
        Err(e) => log::warn!("Failed to render settings: {}", e),
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}
