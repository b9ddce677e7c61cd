//! Storage abstraction used by the import driver.

use hltb_catalog::types::NewGame;
use rusqlite::Connection;

use crate::operations::{self, OperationError, RowRef};
use crate::schema::{self, SchemaError};

/// Find-or-create operations over the five catalog entities.
///
/// The import driver takes a store explicitly instead of reaching for a
/// shared connection, so tests can substitute their own.
pub trait CatalogStore {
    /// Create any missing tables.
    fn migrate(&self) -> Result<(), SchemaError>;

    fn first_or_create_game(&self, game: &NewGame) -> Result<RowRef, OperationError>;

    fn first_or_create_genre(&self, name: &str) -> Result<RowRef, OperationError>;

    fn first_or_create_platform(&self, name: &str) -> Result<RowRef, OperationError>;

    fn first_or_create_game_genre(
        &self,
        game_id: i64,
        genre_id: i64,
    ) -> Result<RowRef, OperationError>;

    /// `minutes` is only stored when the pair is new.
    fn first_or_create_game_platform(
        &self,
        game_id: i64,
        platform_id: i64,
        minutes: i64,
    ) -> Result<RowRef, OperationError>;
}

impl CatalogStore for Connection {
    fn migrate(&self) -> Result<(), SchemaError> {
        schema::create_schema(self)
    }

    fn first_or_create_game(&self, game: &NewGame) -> Result<RowRef, OperationError> {
        operations::first_or_create_game(self, game)
    }

    fn first_or_create_genre(&self, name: &str) -> Result<RowRef, OperationError> {
        operations::first_or_create_genre(self, name)
    }

    fn first_or_create_platform(&self, name: &str) -> Result<RowRef, OperationError> {
        operations::first_or_create_platform(self, name)
    }

    fn first_or_create_game_genre(
        &self,
        game_id: i64,
        genre_id: i64,
    ) -> Result<RowRef, OperationError> {
        operations::first_or_create_game_genre(self, game_id, genre_id)
    }

    fn first_or_create_game_platform(
        &self,
        game_id: i64,
        platform_id: i64,
        minutes: i64,
    ) -> Result<RowRef, OperationError> {
        operations::first_or_create_game_platform(self, game_id, platform_id, minutes)
    }
}
