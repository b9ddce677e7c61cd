use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hltb_db::ConnectionSettings;

use crate::CliError;

use super::open_existing_db;

pub(crate) fn run_stats(db_path: &Path, settings: &ConnectionSettings) -> Result<(), CliError> {
    let Some(conn) = open_existing_db(db_path, settings)? else {
        return Ok(());
    };

    let stats = hltb_db::catalog_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query stats: {}", e)))?;

    log::info!(
        "{}",
        "Games Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Games:           {:>8}", stats.games);
    log::info!("  Genres:          {:>8}", stats.genres);
    log::info!("  Platforms:       {:>8}", stats.platforms);
    log::info!("  Genre links:     {:>8}", stats.game_genres);
    log::info!("  Platform links:  {:>8}", stats.game_platforms);
    log::info!("  Import runs:     {:>8}", stats.import_runs);

    Ok(())
}
