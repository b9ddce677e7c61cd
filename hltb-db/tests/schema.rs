use hltb_db::schema::{CURRENT_VERSION, create_schema, get_schema_version};
use hltb_db::{
    CatalogStore, ConnectionSettings, JournalMode, SchemaError, Synchronous, open_connection,
    open_database, open_memory,
};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error or add a second version row
    create_schema(&conn).unwrap();
    let rows: i32 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    let tables = [
        "schema_version",
        "games",
        "genres",
        "platforms",
        "game_genres",
        "game_platforms",
        "import_log",
    ];
    for table in tables {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn file_database_uses_import_pragmas() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_database(&dir.path().join("games.db"), &ConnectionSettings::default()).unwrap();

    let journal: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(journal, "wal");

    let busy: i64 = conn
        .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
        .unwrap();
    assert_eq!(busy, 5000);

    // NORMAL
    let sync: i64 = conn
        .query_row("PRAGMA synchronous", [], |row| row.get(0))
        .unwrap();
    assert_eq!(sync, 1);
}

#[test]
fn custom_settings_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    let settings = ConnectionSettings {
        journal_mode: JournalMode::Delete,
        busy_timeout_ms: 250,
        synchronous: Synchronous::Full,
    };
    let conn = open_database(&dir.path().join("games.db"), &settings).unwrap();

    let journal: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(journal, "delete");
    let busy: i64 = conn
        .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
        .unwrap();
    assert_eq!(busy, 250);
    let sync: i64 = conn
        .query_row("PRAGMA synchronous", [], |row| row.get(0))
        .unwrap();
    assert_eq!(sync, 2);
}

#[test]
fn reopen_keeps_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.db");
    drop(open_database(&path, &ConnectionSettings::default()).unwrap());
    let conn = open_database(&path, &ConnectionSettings::default()).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn newer_database_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.db");
    {
        let conn = open_database(&path, &ConnectionSettings::default()).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }
    let err = open_database(&path, &ConnectionSettings::default()).unwrap_err();
    assert!(matches!(err, SchemaError::VersionMismatch { .. }));
}

#[test]
fn non_database_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.db");
    std::fs::write(&path, "not a sqlite database\n".repeat(512)).unwrap();
    assert!(open_database(&path, &ConnectionSettings::default()).is_err());
}

#[test]
fn open_connection_leaves_schema_to_migrate() {
    let dir = tempfile::tempdir().unwrap();
    let conn =
        open_connection(&dir.path().join("games.db"), &ConnectionSettings::default()).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), 0);

    let store: &dyn CatalogStore = &conn;
    store.migrate().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn open_connection_rejects_newer_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.db");
    {
        let conn = open_database(&path, &ConnectionSettings::default()).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }
    let err = open_connection(&path, &ConnectionSettings::default()).unwrap_err();
    assert!(matches!(err, SchemaError::VersionMismatch { .. }));
}
