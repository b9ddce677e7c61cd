use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hltb_db::{CatalogStore, ConnectionSettings};
use hltb_import::{ImportProgress, ImportStats, LogProgress, import_reader, log_import};

use crate::CliError;
use crate::spinner::SpinnerProgress;

use super::open_store;

/// Import a JSON-lines file into the games database.
///
/// The input file is opened before the database so a bad path fails without
/// creating an empty database.
pub(crate) fn run_import(
    file: &Path,
    db_path: &Path,
    settings: &ConnectionSettings,
    quiet: bool,
) -> Result<(), CliError> {
    let input = File::open(file)
        .map_err(|e| CliError::input(format!("Error opening file {}: {}", file.display(), e)))?;

    let conn = open_store(db_path, settings)?;
    conn.migrate().map_err(|e| {
        CliError::database(format!(
            "Failed to migrate database at {}: {}",
            db_path.display(),
            e
        ))
    })?;

    let progress: Box<dyn ImportProgress> = if quiet || !io::stdout().is_terminal() {
        Box::new(LogProgress::default())
    } else {
        Box::new(SpinnerProgress::new())
    };
    progress.on_phase(&format!(
        "{}",
        format!("Importing {} into {}", file.display(), db_path.display())
            .if_supports_color(Stdout, |t| t.bold()),
    ));

    let stats = import_reader(&conn, BufReader::new(input), Some(progress.as_ref()));
    progress.on_complete(&stats.summary());
    log_stats(&stats);

    if let Err(e) = log_import(&conn, file, &stats) {
        log::warn!("Failed to record import log: {}", e);
    }

    Ok(())
}

fn log_stats(stats: &ImportStats) {
    crate::log_blank();
    log::info!("  Lines read:        {:>8}", stats.lines_read);
    log::info!("  Records imported:  {:>8}", stats.records_imported);
    log::info!("  Games created:     {:>8}", stats.games_created);
    log::info!("  Games existing:    {:>8}", stats.games_existing);
    log::info!("  Genres created:    {:>8}", stats.genres_created);
    log::info!("  Platforms created: {:>8}", stats.platforms_created);
    log::info!("  Genre links:       {:>8}", stats.game_genres_created);
    log::info!("  Platform links:    {:>8}", stats.game_platforms_created);

    let problems = [
        ("Blank lines", stats.blank_lines),
        ("Parse errors", stats.parse_errors),
        ("Unnamed records", stats.skipped_unnamed),
        ("Field warnings", stats.field_warnings),
        ("Storage errors", stats.store_errors),
    ];
    for (label, count) in problems {
        if count > 0 {
            log::info!(
                "  {:<18} {:>8}",
                format!("{label}:"),
                count.if_supports_color(Stdout, |t| t.yellow()),
            );
        }
    }

    if stats.stopped_early {
        log::warn!(
            "{}",
            "Reading stopped early; the rest of the file was not imported."
                .if_supports_color(Stdout, |t| t.red()),
        );
    }
}
