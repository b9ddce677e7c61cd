//! Settings file (`~/.config/hltb/settings.toml`).
//!
//! ```toml
//! [database]
//! path = "/data/games.db"
//! journal_mode = "WAL"
//! busy_timeout_ms = 5000
//! synchronous = "NORMAL"
//! ```
//!
//! Every key is optional. A missing file means defaults.

use std::path::{Path, PathBuf};

use hltb_db::ConnectionSettings;
use serde::{Deserialize, Serialize};

/// Database file used when neither `--db` nor `database.path` is set.
pub(crate) const DEFAULT_DB_FILE: &str = "games.db";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DatabaseSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(flatten)]
    pub connection: ConnectionSettings,
}

impl Settings {
    /// Resolve the database path using a priority chain:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `database.path` in `settings.toml`
    /// 3. `games.db` in the current directory
    pub(crate) fn resolve_db_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.database.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }
}

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("hltb").join("settings.toml")
}

/// Load settings from the canonical path.
pub(crate) fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, falling back to defaults when the file is
/// missing or malformed.
pub(crate) fn load_settings_from(path: &Path) -> Settings {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Settings::default();
    };
    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            Settings::default()
        }
    }
}
