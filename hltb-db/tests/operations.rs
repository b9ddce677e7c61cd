use hltb_catalog::types::NewGame;
use hltb_db::*;

fn borderlands() -> NewGame {
    NewGame {
        name: "Borderlands 3".to_string(),
        steam_app_id: "397540".to_string(),
        release_year: 2019,
        review_score: 76,
    }
}

#[test]
fn game_created_once() {
    let conn = open_memory().unwrap();
    let first = first_or_create_game(&conn, &borderlands()).unwrap();
    assert!(first.created);

    let second = first_or_create_game(&conn, &borderlands()).unwrap();
    assert!(!second.created);
    assert_eq!(first.id, second.id);

    let count: i32 = conn
        .query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn existing_game_is_not_updated() {
    let conn = open_memory().unwrap();
    first_or_create_game(&conn, &borderlands()).unwrap();

    let changed = NewGame {
        review_score: 10,
        release_year: 2020,
        ..borderlands()
    };
    first_or_create_game(&conn, &changed).unwrap();

    let game = find_game_by_name(&conn, "Borderlands 3").unwrap().unwrap();
    assert_eq!(game.review_score, 76);
    assert_eq!(game.release_year, 2019);
    assert_eq!(game.steam_app_id, "397540");
}

#[test]
fn genre_and_platform_by_name() {
    let conn = open_memory().unwrap();
    let action = first_or_create_genre(&conn, "Action").unwrap();
    let shooter = first_or_create_genre(&conn, "Shooter").unwrap();
    assert!(action.created && shooter.created);
    assert_ne!(action.id, shooter.id);
    assert_eq!(first_or_create_genre(&conn, "Action").unwrap(), RowRef { id: action.id, created: false });

    let pc = first_or_create_platform(&conn, "PC").unwrap();
    assert!(pc.created);
    assert!(!first_or_create_platform(&conn, "PC").unwrap().created);
}

#[test]
fn genre_and_platform_names_are_independent() {
    let conn = open_memory().unwrap();
    // Same string in both tables is two different entities
    assert!(first_or_create_genre(&conn, "Racing").unwrap().created);
    assert!(first_or_create_platform(&conn, "Racing").unwrap().created);
}

#[test]
fn game_genre_join_is_unique() {
    let conn = open_memory().unwrap();
    let game = first_or_create_game(&conn, &borderlands()).unwrap();
    let genre = first_or_create_genre(&conn, "Action").unwrap();

    let a = first_or_create_game_genre(&conn, game.id, genre.id).unwrap();
    let b = first_or_create_game_genre(&conn, game.id, genre.id).unwrap();
    assert!(a.created);
    assert!(!b.created);
    assert_eq!(a.id, b.id);
}

#[test]
fn game_platform_first_value_wins() {
    let conn = open_memory().unwrap();
    let game = first_or_create_game(&conn, &borderlands()).unwrap();
    let pc = first_or_create_platform(&conn, "PC").unwrap();

    first_or_create_game_platform(&conn, game.id, pc.id, 1377).unwrap();
    let again = first_or_create_game_platform(&conn, game.id, pc.id, 9999).unwrap();
    assert!(!again.created);

    let row = find_game_platform(&conn, game.id, pc.id).unwrap().unwrap();
    assert_eq!(row.time_to_beat, 1377);
}

#[test]
fn join_requires_existing_parents() {
    let conn = open_memory().unwrap();
    let genre = first_or_create_genre(&conn, "Action").unwrap();
    let result = first_or_create_game_genre(&conn, 42, genre.id);
    assert!(matches!(result, Err(OperationError::Sqlite(_))));
}

#[test]
fn store_trait_delegates_to_connection() {
    let conn = open_memory().unwrap();
    let store: &dyn CatalogStore = &conn;
    store.migrate().unwrap();

    let game = store.first_or_create_game(&borderlands()).unwrap();
    let platform = store.first_or_create_platform("PC").unwrap();
    let join = store
        .first_or_create_game_platform(game.id, platform.id, 1377)
        .unwrap();
    assert!(join.created);

    let platforms = platforms_for_game(&conn, game.id).unwrap();
    assert_eq!(platforms.len(), 1);
    assert_eq!(platforms[0].time_to_beat, 1377);
}
