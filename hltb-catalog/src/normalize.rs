//! Field normalizers for HowLongToBeat records.
//!
//! Records carry human-formatted strings that the schema stores as integers
//! or as separate rows:
//! ```text
//! Release_date  "2019-09-13"                     → release year 2019
//! Main          "23h 17m"                        → 1397 minutes
//! Genres        "First-Person, Action, Shooter"  → ["First-Person", "Action", "Shooter"]
//! ```
//!
//! None of these fail a record. Unparseable pieces fall back to zero and are
//! returned to the caller so it can report them against the game.

use thiserror::Error;

/// Duration sentinel meaning "no data".
pub const UNKNOWN_DURATION: &str = "--";

/// Separator between genre names.
const GENRE_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("Invalid release year: '{0}'")]
    InvalidYear(String),
}

// ── Release Year ────────────────────────────────────────────────────────────

/// Extract the year from a `YYYY-MM-DD` release date.
///
/// Only the segment before the first `-` is read. An empty segment is year 0
/// and not an error. The year is not range-checked.
///
/// # Examples
///
/// ```
/// use hltb_catalog::normalize::parse_release_year;
///
/// assert_eq!(parse_release_year("2019-09-13"), Ok(2019));
/// assert_eq!(parse_release_year(""), Ok(0));
/// assert!(parse_release_year("abcd-09-13").is_err());
/// ```
pub fn parse_release_year(date: &str) -> Result<i32, NormalizeError> {
    let segment = date.split('-').next().unwrap_or("");
    if segment.is_empty() {
        return Ok(0);
    }
    segment
        .parse()
        .map_err(|_| NormalizeError::InvalidYear(segment.to_string()))
}

// ── Time To Beat ────────────────────────────────────────────────────────────

/// Result of normalizing a duration string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeToBeat {
    /// Total minutes; tokens listed in `invalid_tokens` contributed 0.
    pub minutes: i64,
    /// Hour/minute tokens whose numeric part did not parse.
    pub invalid_tokens: Vec<String>,
}

impl TimeToBeat {
    pub fn is_clean(&self) -> bool {
        self.invalid_tokens.is_empty()
    }
}

/// Convert a duration such as `"23h 17m"` into total minutes.
///
/// Tokens are read left to right. A token containing `h` counts as hours,
/// otherwise a token containing `m` counts as minutes, and anything else is
/// skipped. Tokens are not deduplicated, so `"2h 3h"` is 300 minutes.
///
/// # Examples
///
/// ```
/// use hltb_catalog::normalize::parse_time_to_beat;
///
/// assert_eq!(parse_time_to_beat("23h 17m").minutes, 1397);
/// assert_eq!(parse_time_to_beat("77h").minutes, 4620);
/// assert_eq!(parse_time_to_beat("--").minutes, 0);
///
/// let odd = parse_time_to_beat("5h xm");
/// assert_eq!(odd.minutes, 300);
/// assert_eq!(odd.invalid_tokens, vec!["xm"]);
/// ```
pub fn parse_time_to_beat(duration: &str) -> TimeToBeat {
    let mut result = TimeToBeat::default();
    if duration == UNKNOWN_DURATION {
        return result;
    }

    for token in duration.split_whitespace() {
        let (digits, scale) = if token.contains('h') {
            (token.replace('h', ""), 60)
        } else if token.contains('m') {
            (token.replace('m', ""), 1)
        } else {
            continue;
        };

        match digits.parse::<i64>() {
            Ok(n) => {
                result.minutes = result.minutes.saturating_add(n.saturating_mul(scale));
            }
            Err(_) => result.invalid_tokens.push(token.to_string()),
        }
    }

    result
}

/// Format minutes back into the `"Xh Ym"` form; 0 renders as `"--"`.
pub fn format_minutes(minutes: i64) -> String {
    if minutes <= 0 {
        return UNKNOWN_DURATION.to_string();
    }
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

// ── Genres ──────────────────────────────────────────────────────────────────

/// Split a `", "`-separated genre list into trimmed, non-empty names.
///
/// ```
/// use hltb_catalog::normalize::split_genres;
///
/// assert_eq!(split_genres("First-Person, Action, Shooter"), vec!["First-Person", "Action", "Shooter"]);
/// assert!(split_genres("").is_empty());
/// ```
pub fn split_genres(genres: &str) -> Vec<&str> {
    genres
        .split(GENRE_SEPARATOR)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect()
}
