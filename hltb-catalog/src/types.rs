//! Data model types for the game catalog.
//!
//! `GameRecord` is the transient shape of one JSON-lines input record. The
//! remaining types mirror the persisted schema: games, genres, platforms,
//! their join rows, and import tracking.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Statistic label consumed from each platform's time table.
pub const MAIN_LABEL: &str = "Main";

// ── Input Record ────────────────────────────────────────────────────────────

/// Labeled duration strings for one platform (e.g. `"Main" => "22h 57m"`).
pub type PlatformTimes = BTreeMap<String, String>;

/// One decoded input line.
///
/// Unknown fields are ignored. Missing or `null` fields take their zero
/// value (empty string, 0, empty map).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Steam catalog identifier. Usually a string, occasionally a bare number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub steam_app_id: String,
    #[serde(rename = "Release_date", default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(rename = "Review_score", default, deserialize_with = "null_as_default")]
    pub review_score: i32,
    /// Comma-space separated genre names.
    #[serde(rename = "Genres", default, deserialize_with = "null_as_default")]
    pub genres: String,
    #[serde(rename = "Stats", default, deserialize_with = "null_as_default")]
    pub stats: GameStats,
}

/// The `Stats` object. Only the per-platform table is read; the play-style
/// and additional-content tables are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameStats {
    #[serde(rename = "Platform", default, deserialize_with = "null_as_default")]
    pub platform: BTreeMap<String, PlatformTimes>,
}

impl GameRecord {
    /// Iterate `(platform name, Main duration string)` in platform-name order.
    ///
    /// Platforms without a `Main` entry yield an empty duration string.
    pub fn main_times(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stats.platform.iter().map(|(platform, times)| {
            let main = times.get(MAIN_LABEL).map(String::as_str).unwrap_or("");
            (platform.as_str(), main)
        })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::String(s)) => s,
        Some(StringOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

// ── Game ────────────────────────────────────────────────────────────────────

/// Attributes used to create a game on first sighting of its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub name: String,
    pub steam_app_id: String,
    /// 0 when the release date was absent or unparseable.
    pub release_year: i32,
    pub review_score: i32,
}

/// A persisted game row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub steam_app_id: String,
    pub release_year: i32,
    pub review_score: i32,
    pub created_at: String,
    pub updated_at: String,
}

// ── Genre / Platform ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub id: i64,
    pub name: String,
}

// ── Join Rows ───────────────────────────────────────────────────────────────

/// A persisted game ↔ platform association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePlatform {
    pub id: i64,
    pub game_id: i64,
    pub platform_id: i64,
    /// Minutes to finish the main story on this platform.
    pub time_to_beat: i64,
}

/// A platform name joined with a game's time-to-beat on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformTime {
    pub platform: String,
    pub time_to_beat: i64,
}

// ── Import Tracking ─────────────────────────────────────────────────────────

/// Log entry for one import run.
#[derive(Debug, Clone)]
pub struct ImportLog {
    pub id: i64,
    pub source_path: String,
    pub imported_at: String,
    pub lines_read: i64,
    pub records_imported: i64,
    pub parse_errors: i64,
    pub games_created: i64,
    pub genres_created: i64,
    pub platforms_created: i64,
    pub store_errors: i64,
}
