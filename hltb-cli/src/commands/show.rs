use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hltb_catalog::format_minutes;
use hltb_db::ConnectionSettings;

use crate::CliError;

use super::open_existing_db;

/// Print a game with its genres and per-platform time to beat.
pub(crate) fn run_show(
    name: &str,
    db_path: &Path,
    settings: &ConnectionSettings,
) -> Result<(), CliError> {
    let Some(conn) = open_existing_db(db_path, settings)? else {
        return Ok(());
    };
    let query_err =
        |e: hltb_db::OperationError| CliError::database(format!("Lookup failed: {}", e));

    let Some(game) = hltb_db::find_game_by_name(&conn, name).map_err(query_err)? else {
        log::warn!("No game named '{}'", name);
        return Ok(());
    };
    let genres = hltb_db::genres_for_game(&conn, game.id).map_err(query_err)?;
    let platforms = hltb_db::platforms_for_game(&conn, game.id).map_err(query_err)?;

    log::info!("{}", game.name.if_supports_color(Stdout, |t| t.bold()));
    if game.release_year > 0 {
        log::info!("  Released:     {}", game.release_year);
    } else {
        log::info!("  Released:     unknown");
    }
    log::info!("  Review score: {}", game.review_score);
    if !game.steam_app_id.is_empty() {
        log::info!("  Steam app id: {}", game.steam_app_id);
    }
    if !genres.is_empty() {
        let names: Vec<_> = genres.iter().map(|g| g.name.as_str()).collect();
        log::info!("  Genres:       {}", names.join(", "));
    }

    if platforms.is_empty() {
        return Ok(());
    }
    crate::log_blank();
    log::info!(
        "  {}",
        "Time to beat (main story)".if_supports_color(Stdout, |t| t.underline()),
    );
    for p in &platforms {
        log::info!("    {:<24} {:>10}", p.platform, format_minutes(p.time_to_beat));
    }

    Ok(())
}
