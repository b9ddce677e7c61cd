use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hltb_db::ConnectionSettings;

use crate::CliError;

use super::open_existing_db;

/// List the most recent import runs.
pub(crate) fn run_imports(
    limit: u32,
    db_path: &Path,
    settings: &ConnectionSettings,
) -> Result<(), CliError> {
    let Some(conn) = open_existing_db(db_path, settings)? else {
        return Ok(());
    };

    let logs = hltb_db::list_import_logs(&conn, Some(limit))
        .map_err(|e| CliError::database(format!("Failed to list import runs: {}", e)))?;

    if logs.is_empty() {
        log::info!("No imports recorded yet.");
        return Ok(());
    }

    log::info!("{}", "Recent imports".if_supports_color(Stdout, |t| t.bold()));
    for log_entry in &logs {
        log::info!(
            "  #{:<4} {}  {}",
            log_entry.id,
            log_entry.imported_at.if_supports_color(Stdout, |t| t.dimmed()),
            log_entry.source_path,
        );
        log::info!(
            "        {} lines, {} records, {} new games, {} new genres, {} new platforms",
            log_entry.lines_read,
            log_entry.records_imported,
            log_entry.games_created,
            log_entry.genres_created,
            log_entry.platforms_created,
        );
        if log_entry.parse_errors > 0 || log_entry.store_errors > 0 {
            log::info!(
                "        {}",
                format!(
                    "{} parse error(s), {} storage error(s)",
                    log_entry.parse_errors, log_entry.store_errors
                )
                .if_supports_color(Stdout, |t| t.yellow()),
            );
        }
    }

    Ok(())
}
