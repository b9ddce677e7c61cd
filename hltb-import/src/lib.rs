//! Import HowLongToBeat JSON-lines exports into the games database.
//!
//! This crate owns the record → row mapping: deriving normalized fields,
//! planning the entities a record touches, and driving first-or-create calls
//! against a [`hltb_db::CatalogStore`] one line at a time.

pub mod jsonl_import;
pub mod mapper;
pub mod progress;
pub mod stats;

pub use jsonl_import::{ImportError, import_reader, import_record};
pub use mapper::{PlannedPlatform, RecordPlan, persist_plan, plan_record};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use stats::{ImportStats, log_import};
