use std::cell::RefCell;

use hltb_catalog::record::parse_record_line;
use hltb_catalog::types::NewGame;
use hltb_db::{CatalogStore, OperationError, RowRef, SchemaError, open_memory};
use hltb_import::*;
use rusqlite::Connection;

const BORDERLANDS: &str = include_str!("fixtures/borderlands3.jsonl");

#[test]
fn plan_for_borderlands() {
    let record = parse_record_line(BORDERLANDS.trim_end()).unwrap();
    let plan = plan_record(&record);

    assert_eq!(
        plan.game,
        NewGame {
            name: "Borderlands 3".to_string(),
            steam_app_id: "397540".to_string(),
            release_year: 2019,
            review_score: 76,
        }
    );
    assert_eq!(plan.genres, vec!["First-Person", "Action", "Shooter"]);
    assert_eq!(plan.platforms.len(), 6);
    assert_eq!(
        plan.platforms[1],
        PlannedPlatform {
            name: "PC".to_string(),
            time_to_beat: 1377,
        }
    );
    assert_eq!(plan.warnings, 0);
}

#[test]
fn plan_ignores_non_main_labels() {
    let record = parse_record_line(
        r#"{"Name": "G", "Stats": {"Platform": {"PC": {"Polled": "77%", "100%": "9h", "Main +": "11h"}}}}"#,
    )
    .unwrap();
    let plan = plan_record(&record);
    assert_eq!(plan.platforms[0].time_to_beat, 0);
    assert_eq!(plan.warnings, 0);
}

#[test]
fn plan_counts_field_warnings() {
    let record = parse_record_line(
        r#"{"Name": "G", "Release_date": "soon", "Stats": {"Platform": {"PC": {"Main": "?h"}}}}"#,
    )
    .unwrap();
    let plan = plan_record(&record);
    assert_eq!(plan.game.release_year, 0);
    assert_eq!(plan.platforms[0].time_to_beat, 0);
    assert_eq!(plan.warnings, 2);
}

#[test]
fn plan_with_no_genres_or_platforms() {
    let record = parse_record_line(r#"{"Name": "Bare"}"#).unwrap();
    let plan = plan_record(&record);
    assert!(plan.genres.is_empty());
    assert!(plan.platforms.is_empty());
}

/// Real storage for parent rows. Every join call is recorded and fails.
struct FailingJoins {
    conn: Connection,
    join_calls: RefCell<Vec<String>>,
    fail_games: bool,
}

impl FailingJoins {
    fn new(fail_games: bool) -> Self {
        Self {
            conn: open_memory().unwrap(),
            join_calls: RefCell::new(Vec::new()),
            fail_games,
        }
    }
}

impl CatalogStore for FailingJoins {
    fn migrate(&self) -> Result<(), SchemaError> {
        self.conn.migrate()
    }

    fn first_or_create_game(&self, game: &NewGame) -> Result<RowRef, OperationError> {
        if self.fail_games {
            return Err(OperationError::Sqlite(rusqlite::Error::InvalidQuery));
        }
        self.conn.first_or_create_game(game)
    }

    fn first_or_create_genre(&self, name: &str) -> Result<RowRef, OperationError> {
        self.conn.first_or_create_genre(name)
    }

    fn first_or_create_platform(&self, name: &str) -> Result<RowRef, OperationError> {
        self.conn.first_or_create_platform(name)
    }

    fn first_or_create_game_genre(
        &self,
        game_id: i64,
        genre_id: i64,
    ) -> Result<RowRef, OperationError> {
        self.join_calls
            .borrow_mut()
            .push(format!("genre {game_id}/{genre_id}"));
        Err(OperationError::Sqlite(rusqlite::Error::InvalidQuery))
    }

    fn first_or_create_game_platform(
        &self,
        game_id: i64,
        platform_id: i64,
        _minutes: i64,
    ) -> Result<RowRef, OperationError> {
        self.join_calls
            .borrow_mut()
            .push(format!("platform {game_id}/{platform_id}"));
        Err(OperationError::Sqlite(rusqlite::Error::InvalidQuery))
    }
}

#[test]
fn join_failures_do_not_stop_the_record() {
    let store = FailingJoins::new(false);
    let record = parse_record_line(BORDERLANDS.trim_end()).unwrap();
    let mut stats = ImportStats::default();

    import_record(&store, &record, &mut stats);

    assert_eq!(store.join_calls.borrow().len(), 9);
    assert_eq!(stats.store_errors, 9);
    assert_eq!(stats.games_created, 1);
    assert_eq!(stats.genres_created, 3);
    assert_eq!(stats.platforms_created, 6);
    assert_eq!(stats.game_genres_created, 0);
    assert_eq!(stats.records_imported, 1);
}

#[test]
fn game_failure_skips_joins() {
    let store = FailingJoins::new(true);
    let record = parse_record_line(BORDERLANDS.trim_end()).unwrap();
    let mut stats = ImportStats::default();

    import_record(&store, &record, &mut stats);

    assert!(store.join_calls.borrow().is_empty());
    assert_eq!(stats.store_errors, 1);
    assert_eq!(stats.genres_created, 0);
    assert_eq!(stats.records_imported, 0);
}

#[test]
fn persist_reports_whether_the_game_was_stored() {
    let record = parse_record_line(BORDERLANDS.trim_end()).unwrap();
    let plan = plan_record(&record);

    let mut stats = ImportStats::default();
    assert!(!persist_plan(&FailingJoins::new(true), &plan, &mut stats));

    // Join failures alone still leave the game stored
    let mut stats = ImportStats::default();
    assert!(persist_plan(&FailingJoins::new(false), &plan, &mut stats));
    assert_eq!(stats.store_errors, 9);
}

#[test]
fn failing_store_does_not_abort_the_run() {
    let store = FailingJoins::new(false);
    let input = format!("{BORDERLANDS}{{\"Name\": \"Celeste\", \"Genres\": \"Platform\"}}\n");
    let stats = import_reader(&store, std::io::Cursor::new(input.into_bytes()), None);

    assert_eq!(stats.records_imported, 2);
    assert_eq!(stats.games_created, 2);
    assert_eq!(stats.store_errors, 10);
}
