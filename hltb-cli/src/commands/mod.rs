pub(crate) mod config;
pub(crate) mod import;
pub(crate) mod imports;
pub(crate) mod show;
pub(crate) mod stats;

use std::path::Path;

use hltb_db::ConnectionSettings;
use rusqlite::Connection;

use crate::CliError;

/// Open (or create) the database, applying connection settings and schema.
pub(crate) fn open_db(path: &Path, settings: &ConnectionSettings) -> Result<Connection, CliError> {
    hltb_db::open_database(path, settings).map_err(|e| {
        CliError::database(format!(
            "Failed to open database at {}: {}",
            path.display(),
            e
        ))
    })
}

/// Open (or create) the database file without creating tables. The caller
/// migrates through [`hltb_db::CatalogStore::migrate`].
pub(crate) fn open_store(
    path: &Path,
    settings: &ConnectionSettings,
) -> Result<Connection, CliError> {
    hltb_db::open_connection(path, settings).map_err(|e| {
        CliError::database(format!(
            "Failed to open database at {}: {}",
            path.display(),
            e
        ))
    })
}

/// Open an existing database for reading. Returns `None` (after telling the
/// user how to create one) when the file does not exist.
pub(crate) fn open_existing_db(
    path: &Path,
    settings: &ConnectionSettings,
) -> Result<Option<Connection>, CliError> {
    if !path.exists() {
        log::warn!("No games database found at {}", path.display());
        log::info!("Run 'hltb import --file <games.jsonl>' to create one.");
        return Ok(None);
    }
    open_db(path, settings).map(Some)
}
