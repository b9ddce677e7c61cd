//! Read-only queries over the games database.

use hltb_catalog::types::*;
use rusqlite::{Connection, OptionalExtension, params};

use crate::operations::OperationError;

// ── Lookups ─────────────────────────────────────────────────────────────────

/// Find a game by exact name.
pub fn find_game_by_name(conn: &Connection, name: &str) -> Result<Option<Game>, OperationError> {
    let game = conn
        .query_row(
            "SELECT id, name, steam_app_id, release_year, review_score, created_at, updated_at
             FROM games WHERE name = ?1",
            params![name],
            |row| {
                Ok(Game {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    steam_app_id: row.get(2)?,
                    release_year: row.get(3)?,
                    review_score: row.get(4)?,
                    created_at: row.get(5)?,
                    updated_at: row.get(6)?,
                })
            },
        )
        .optional()?;
    Ok(game)
}

/// Find a genre by exact name.
pub fn find_genre_by_name(conn: &Connection, name: &str) -> Result<Option<Genre>, OperationError> {
    let genre = conn
        .query_row(
            "SELECT id, name FROM genres WHERE name = ?1",
            params![name],
            |row| {
                Ok(Genre {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(genre)
}

/// Find a platform by exact name.
pub fn find_platform_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<Platform>, OperationError> {
    let platform = conn
        .query_row(
            "SELECT id, name FROM platforms WHERE name = ?1",
            params![name],
            |row| {
                Ok(Platform {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(platform)
}

/// Get the association row for a (game, platform) pair.
pub fn find_game_platform(
    conn: &Connection,
    game_id: i64,
    platform_id: i64,
) -> Result<Option<GamePlatform>, OperationError> {
    let row = conn
        .query_row(
            "SELECT id, game_id, platform_id, time_to_beat FROM game_platforms
             WHERE game_id = ?1 AND platform_id = ?2",
            params![game_id, platform_id],
            |row| {
                Ok(GamePlatform {
                    id: row.get(0)?,
                    game_id: row.get(1)?,
                    platform_id: row.get(2)?,
                    time_to_beat: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(row)
}

/// Genres of a game, in the order they were associated.
pub fn genres_for_game(conn: &Connection, game_id: i64) -> Result<Vec<Genre>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT g.id, g.name FROM game_genres gg
         JOIN genres g ON g.id = gg.genre_id
         WHERE gg.game_id = ?1
         ORDER BY gg.id",
    )?;
    let rows = stmt.query_map(params![game_id], |row| {
        Ok(Genre {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    let mut genres = Vec::new();
    for row in rows {
        genres.push(row?);
    }
    Ok(genres)
}

/// Platforms of a game with their time-to-beat, ordered by platform name.
pub fn platforms_for_game(
    conn: &Connection,
    game_id: i64,
) -> Result<Vec<PlatformTime>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT p.name, gp.time_to_beat FROM game_platforms gp
         JOIN platforms p ON p.id = gp.platform_id
         WHERE gp.game_id = ?1
         ORDER BY p.name",
    )?;
    let rows = stmt.query_map(params![game_id], |row| {
        Ok(PlatformTime {
            platform: row.get(0)?,
            time_to_beat: row.get(1)?,
        })
    })?;
    let mut platforms = Vec::new();
    for row in rows {
        platforms.push(row?);
    }
    Ok(platforms)
}

// ── Import Logs ─────────────────────────────────────────────────────────────

/// List import runs, most recent first.
pub fn list_import_logs(
    conn: &Connection,
    limit: Option<u32>,
) -> Result<Vec<ImportLog>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, source_path, imported_at, lines_read, records_imported, parse_errors,
                games_created, genres_created, platforms_created, store_errors
         FROM import_log ORDER BY id DESC LIMIT ?1",
    )?;
    // SQLite treats a negative LIMIT as "no limit"
    let limit = limit.map(i64::from).unwrap_or(-1);
    let rows = stmt.query_map(params![limit], |row| {
        Ok(ImportLog {
            id: row.get(0)?,
            source_path: row.get(1)?,
            imported_at: row.get(2)?,
            lines_read: row.get(3)?,
            records_imported: row.get(4)?,
            parse_errors: row.get(5)?,
            games_created: row.get(6)?,
            genres_created: row.get(7)?,
            platforms_created: row.get(8)?,
            store_errors: row.get(9)?,
        })
    })?;
    let mut logs = Vec::new();
    for row in rows {
        logs.push(row?);
    }
    Ok(logs)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall row counts.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let games: i64 = conn.query_row("SELECT COUNT(*) FROM games", [], |r| r.get(0))?;
    let genres: i64 = conn.query_row("SELECT COUNT(*) FROM genres", [], |r| r.get(0))?;
    let platforms: i64 = conn.query_row("SELECT COUNT(*) FROM platforms", [], |r| r.get(0))?;
    let game_genres: i64 = conn.query_row("SELECT COUNT(*) FROM game_genres", [], |r| r.get(0))?;
    let game_platforms: i64 =
        conn.query_row("SELECT COUNT(*) FROM game_platforms", [], |r| r.get(0))?;
    let import_runs: i64 = conn.query_row("SELECT COUNT(*) FROM import_log", [], |r| r.get(0))?;

    Ok(CatalogStats {
        games,
        genres,
        platforms,
        game_genres,
        game_platforms,
        import_runs,
    })
}

/// Summary statistics for the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub games: i64,
    pub genres: i64,
    pub platforms: i64,
    pub game_genres: i64,
    pub game_platforms: i64,
    pub import_runs: i64,
}
