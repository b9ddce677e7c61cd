//! SQLite persistence layer for the game catalog.
//!
//! Provides connection setup, schema creation, first-or-create operations,
//! and query APIs backed by SQLite (via rusqlite with bundled feature).

pub mod connection;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use connection::{ConnectionSettings, JournalMode, Synchronous};
pub use operations::{
    OperationError, RowRef, first_or_create_game, first_or_create_game_genre,
    first_or_create_game_platform, first_or_create_genre, first_or_create_platform,
    insert_import_log,
};
pub use queries::{
    CatalogStats, catalog_stats, find_game_by_name, find_game_platform, find_genre_by_name,
    find_platform_by_name, genres_for_game, list_import_logs, platforms_for_game,
};
pub use schema::{SchemaError, open_connection, open_database, open_memory};
pub use store::CatalogStore;
