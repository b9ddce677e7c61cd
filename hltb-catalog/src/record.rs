//! JSON-lines record decoding.
//!
//! Keys are matched the way exporters built on Go's `encoding/json` expect:
//! a repeated key keeps its last value, and a field whose exact key is absent
//! is matched case-insensitively (`"name"` fills `Name`).

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::GameRecord;

/// Top-level keys of a record, as exported.
const RECORD_KEYS: &[&str] = &[
    "Name",
    "steam_app_id",
    "Release_date",
    "Review_score",
    "Genres",
    "Stats",
];

/// Keys of the `Stats` object.
const STATS_KEYS: &[&str] = &["Platform"];

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode one input line into a [`GameRecord`].
///
/// ```
/// use hltb_catalog::record::parse_record_line;
///
/// let record = parse_record_line(r#"{"Name": "Celeste", "Review_score": 92, "Extra": 1}"#).unwrap();
/// assert_eq!(record.name, "Celeste");
/// assert_eq!(record.review_score, 92);
/// assert!(record.genres.is_empty());
/// ```
pub fn parse_record_line(line: &str) -> Result<GameRecord, RecordError> {
    parse_record_bytes(line.as_bytes())
}

/// Decode one raw input line. Invalid UTF-8 is reported as a JSON error.
pub fn parse_record_bytes(line: &[u8]) -> Result<GameRecord, RecordError> {
    let mut value: Value = serde_json::from_slice(line)?;
    if let Value::Object(record) = &mut value {
        fold_keys(record, RECORD_KEYS);
        if let Some(Value::Object(stats)) = record.get_mut("Stats") {
            fold_keys(stats, STATS_KEYS);
        }
    }
    Ok(GameRecord::deserialize(value)?)
}

/// Rename case-insensitive matches of `keys` to their canonical spelling.
///
/// An exact match always wins. Otherwise the first variant in key order is
/// used and the others are left as unknown fields.
fn fold_keys(object: &mut Map<String, Value>, keys: &[&str]) {
    for &key in keys {
        if object.contains_key(key) {
            continue;
        }
        let variant = object
            .keys()
            .find(|k| k.eq_ignore_ascii_case(key))
            .cloned();
        if let Some(value) = variant.and_then(|v| object.remove(&v)) {
            object.insert(key.to_string(), value);
        }
    }
}
