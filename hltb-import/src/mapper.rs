//! Map a decoded record onto catalog rows.
//!
//! Mapping is split in two: [`plan_record`] derives every normalized value
//! without touching storage, and [`persist_plan`] replays the plan as
//! first-or-create calls in dependency order (game, then each genre and its
//! join, then each platform and its join).

use hltb_catalog::normalize::{parse_release_year, parse_time_to_beat, split_genres};
use hltb_catalog::types::{GameRecord, NewGame};
use hltb_db::{CatalogStore, OperationError};

use crate::stats::ImportStats;

/// Everything one record contributes to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPlan {
    pub game: NewGame,
    pub genres: Vec<String>,
    pub platforms: Vec<PlannedPlatform>,
    /// Fields that fell back to zero while normalizing.
    pub warnings: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPlatform {
    pub name: String,
    /// Normalized `Main` time in minutes.
    pub time_to_beat: i64,
}

/// Normalize a record into a [`RecordPlan`].
///
/// Unparseable release years and duration tokens are logged against the game
/// and contribute 0.
pub fn plan_record(record: &GameRecord) -> RecordPlan {
    let mut warnings = 0;

    let release_year = parse_release_year(&record.release_date).unwrap_or_else(|e| {
        log::warn!(
            "{}: {} (release date '{}')",
            record.name,
            e,
            record.release_date
        );
        warnings += 1;
        0
    });

    let genres = split_genres(&record.genres)
        .into_iter()
        .map(str::to_string)
        .collect();

    let platforms = record
        .main_times()
        .map(|(platform, main)| {
            let time = parse_time_to_beat(main);
            if !time.is_clean() {
                log::warn!(
                    "{}: unparseable time on {}: '{}' (ignored tokens: {})",
                    record.name,
                    platform,
                    main,
                    time.invalid_tokens.join(", ")
                );
                warnings += 1;
            }
            PlannedPlatform {
                name: platform.to_string(),
                time_to_beat: time.minutes,
            }
        })
        .collect();

    RecordPlan {
        game: NewGame {
            name: record.name.clone(),
            steam_app_id: record.steam_app_id.clone(),
            release_year,
            review_score: record.review_score,
        },
        genres,
        platforms,
        warnings,
    }
}

/// Write a plan through the store, counting into `stats`.
///
/// Storage failures are logged and counted but never stop the record: every
/// remaining genre and platform is still attempted. Only a failure to store
/// the game itself skips the joins, which would have no parent row.
///
/// Returns `false` when the game row could not be stored.
pub fn persist_plan(
    store: &dyn CatalogStore,
    plan: &RecordPlan,
    stats: &mut ImportStats,
) -> bool {
    let game_name = &plan.game.name;
    let game = match store.first_or_create_game(&plan.game) {
        Ok(game) => game,
        Err(e) => {
            store_failed(stats, &format!("game '{game_name}'"), &e);
            return false;
        }
    };
    if game.created {
        stats.games_created += 1;
    } else {
        stats.games_existing += 1;
    }

    for name in &plan.genres {
        let genre = match store.first_or_create_genre(name) {
            Ok(genre) => genre,
            Err(e) => {
                store_failed(stats, &format!("genre '{name}'"), &e);
                continue;
            }
        };
        if genre.created {
            stats.genres_created += 1;
        }
        match store.first_or_create_game_genre(game.id, genre.id) {
            Ok(join) if join.created => stats.game_genres_created += 1,
            Ok(_) => {}
            Err(e) => store_failed(stats, &format!("genre '{name}' for '{game_name}'"), &e),
        }
    }

    for planned in &plan.platforms {
        let platform = match store.first_or_create_platform(&planned.name) {
            Ok(platform) => platform,
            Err(e) => {
                store_failed(stats, &format!("platform '{}'", planned.name), &e);
                continue;
            }
        };
        if platform.created {
            stats.platforms_created += 1;
        }
        match store.first_or_create_game_platform(game.id, platform.id, planned.time_to_beat) {
            Ok(join) if join.created => stats.game_platforms_created += 1,
            Ok(_) => {}
            Err(e) => store_failed(
                stats,
                &format!("platform '{}' for '{game_name}'", planned.name),
                &e,
            ),
        }
    }

    true
}

fn store_failed(stats: &mut ImportStats, what: &str, err: &OperationError) {
    log::warn!("Failed to store {}: {}", what, err);
    stats.store_errors += 1;
}
