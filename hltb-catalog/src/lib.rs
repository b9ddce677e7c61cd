//! Game catalog data model types, JSON-lines record parsing, and field
//! normalization.
//!
//! This crate defines the import data model without any database
//! dependencies. `hltb-db` persists the row types defined here and
//! `hltb-import` drives the record → row mapping.

pub mod normalize;
pub mod record;
pub mod types;

pub use normalize::{
    NormalizeError, TimeToBeat, UNKNOWN_DURATION, format_minutes, parse_release_year,
    parse_time_to_beat, split_genres,
};
pub use record::{RecordError, parse_record_bytes, parse_record_line};
pub use types::*;
