//! First-or-create operations for all catalog entity types.
//!
//! Every operation looks a row up by its natural key and inserts it only when
//! absent. Existing rows are never updated.

use hltb_catalog::types::{ImportLog, NewGame};
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// The row a first-or-create call resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRef {
    pub id: i64,
    /// True if this call inserted the row.
    pub created: bool,
}

impl RowRef {
    fn existing(id: i64) -> Self {
        Self { id, created: false }
    }

    fn created(id: i64) -> Self {
        Self { id, created: true }
    }
}

// ── Game Operations ─────────────────────────────────────────────────────────

/// Find a game by name, or create it with the given attributes.
///
/// Attributes of an existing game are left untouched.
pub fn first_or_create_game(conn: &Connection, game: &NewGame) -> Result<RowRef, OperationError> {
    let existing = conn
        .prepare_cached("SELECT id FROM games WHERE name = ?1")?
        .query_row(params![game.name], |row| row.get(0))
        .optional()?;
    if let Some(id) = existing {
        return Ok(RowRef::existing(id));
    }

    conn.prepare_cached(
        "INSERT INTO games (name, steam_app_id, release_year, review_score)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![
        game.name,
        game.steam_app_id,
        game.release_year,
        game.review_score,
    ])?;
    Ok(RowRef::created(conn.last_insert_rowid()))
}

// ── Genre / Platform Operations ─────────────────────────────────────────────

/// Find a genre by name, or create it.
pub fn first_or_create_genre(conn: &Connection, name: &str) -> Result<RowRef, OperationError> {
    first_or_create_named(
        conn,
        "SELECT id FROM genres WHERE name = ?1",
        "INSERT INTO genres (name) VALUES (?1)",
        name,
    )
}

/// Find a platform by name, or create it.
pub fn first_or_create_platform(conn: &Connection, name: &str) -> Result<RowRef, OperationError> {
    first_or_create_named(
        conn,
        "SELECT id FROM platforms WHERE name = ?1",
        "INSERT INTO platforms (name) VALUES (?1)",
        name,
    )
}

fn first_or_create_named(
    conn: &Connection,
    select_sql: &str,
    insert_sql: &str,
    name: &str,
) -> Result<RowRef, OperationError> {
    let existing = conn
        .prepare_cached(select_sql)?
        .query_row(params![name], |row| row.get(0))
        .optional()?;
    if let Some(id) = existing {
        return Ok(RowRef::existing(id));
    }

    conn.prepare_cached(insert_sql)?.execute(params![name])?;
    Ok(RowRef::created(conn.last_insert_rowid()))
}

// ── Join Operations ─────────────────────────────────────────────────────────

/// Find or create the association between a game and a genre.
pub fn first_or_create_game_genre(
    conn: &Connection,
    game_id: i64,
    genre_id: i64,
) -> Result<RowRef, OperationError> {
    let existing = conn
        .prepare_cached("SELECT id FROM game_genres WHERE game_id = ?1 AND genre_id = ?2")?
        .query_row(params![game_id, genre_id], |row| row.get(0))
        .optional()?;
    if let Some(id) = existing {
        return Ok(RowRef::existing(id));
    }

    conn.prepare_cached("INSERT INTO game_genres (game_id, genre_id) VALUES (?1, ?2)")?
        .execute(params![game_id, genre_id])?;
    Ok(RowRef::created(conn.last_insert_rowid()))
}

/// Find or create the association between a game and a platform.
///
/// The lookup key is `(game_id, platform_id)` only: when the pair already
/// exists its stored `time_to_beat` is kept and `minutes` is ignored.
pub fn first_or_create_game_platform(
    conn: &Connection,
    game_id: i64,
    platform_id: i64,
    minutes: i64,
) -> Result<RowRef, OperationError> {
    let existing = conn
        .prepare_cached("SELECT id FROM game_platforms WHERE game_id = ?1 AND platform_id = ?2")?
        .query_row(params![game_id, platform_id], |row| row.get(0))
        .optional()?;
    if let Some(id) = existing {
        return Ok(RowRef::existing(id));
    }

    conn.prepare_cached(
        "INSERT INTO game_platforms (game_id, platform_id, time_to_beat) VALUES (?1, ?2, ?3)",
    )?
    .execute(params![game_id, platform_id, minutes])?;
    Ok(RowRef::created(conn.last_insert_rowid()))
}

// ── Import Log Operations ───────────────────────────────────────────────────

/// Insert an import log entry. Returns the new row id.
pub fn insert_import_log(conn: &Connection, log: &ImportLog) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_path, imported_at, lines_read, records_imported,
             parse_errors, games_created, genres_created, platforms_created, store_errors)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            log.source_path,
            log.imported_at,
            log.lines_read,
            log.records_imported,
            log.parse_errors,
            log.games_created,
            log.genres_created,
            log.platforms_created,
            log.store_errors,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
