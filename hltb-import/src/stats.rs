//! Import run counters and the persisted import log.

use std::path::Path;

use hltb_catalog::types::ImportLog;
use hltb_db::operations;
use rusqlite::Connection;

use crate::jsonl_import::ImportError;

/// Statistics from a single import run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    /// Lines consumed from the input, including blank and malformed ones.
    pub lines_read: u64,
    pub blank_lines: u64,
    pub parse_errors: u64,
    /// Records with an empty `Name`.
    pub skipped_unnamed: u64,
    /// Records whose game row was stored.
    pub records_imported: u64,
    /// Release years and durations that fell back to zero.
    pub field_warnings: u64,
    pub games_created: u64,
    pub games_existing: u64,
    pub genres_created: u64,
    pub platforms_created: u64,
    pub game_genres_created: u64,
    pub game_platforms_created: u64,
    pub store_errors: u64,
    /// Reading stopped on an I/O error before end of input.
    pub stopped_early: bool,
}

impl ImportStats {
    /// One-line summary for progress reporters.
    pub fn summary(&self) -> String {
        format!(
            "Imported {} record(s) from {} line(s): {} new game(s), {} existing, {} parse error(s), {} storage error(s)",
            self.records_imported,
            self.lines_read,
            self.games_created,
            self.games_existing,
            self.parse_errors,
            self.store_errors,
        )
    }
}

/// Record an import run in the `import_log` table.
pub fn log_import(conn: &Connection, source: &Path, stats: &ImportStats) -> Result<i64, ImportError> {
    let now = chrono::Utc::now().to_rfc3339();
    let log_entry = ImportLog {
        id: 0,
        source_path: source.display().to_string(),
        imported_at: now,
        lines_read: stats.lines_read as i64,
        records_imported: stats.records_imported as i64,
        parse_errors: stats.parse_errors as i64,
        games_created: stats.games_created as i64,
        genres_created: stats.genres_created as i64,
        platforms_created: stats.platforms_created as i64,
        store_errors: stats.store_errors as i64,
    };
    let id = operations::insert_import_log(conn, &log_entry)?;
    Ok(id)
}
