//! Drive a JSON-lines file through the mapper, one line at a time.
//!
//! Nothing in here is fatal: malformed lines, bad fields,
//! and storage failures are logged and counted in [`ImportStats`].

use std::io::BufRead;

use hltb_catalog::record::parse_record_bytes;
use hltb_catalog::types::GameRecord;
use hltb_db::{CatalogStore, OperationError};
use thiserror::Error;

use crate::mapper::{persist_plan, plan_record};
use crate::progress::ImportProgress;
use crate::stats::ImportStats;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
}

/// Import newline-delimited JSON records from `reader`.
///
/// Blank lines are skipped. A line that fails to decode is logged with its
/// 1-based line number and skipped. A read error ends the import early.
pub fn import_reader<R: BufRead>(
    store: &dyn CatalogStore,
    mut reader: R,
    progress: Option<&dyn ImportProgress>,
) -> ImportStats {
    let mut stats = ImportStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("Error reading input after line {}: {}", stats.lines_read, e);
                stats.stopped_early = true;
                break;
            }
        }
        stats.lines_read += 1;
        let line_number = stats.lines_read;

        if line.iter().all(u8::is_ascii_whitespace) {
            stats.blank_lines += 1;
            continue;
        }

        let record = match parse_record_bytes(&line) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Line {}: {}", line_number, e);
                stats.parse_errors += 1;
                continue;
            }
        };

        import_record(store, &record, &mut stats);

        if let Some(p) = progress {
            p.on_record(line_number, &record.name);
        }
    }

    stats
}

/// Map and persist a single decoded record.
pub fn import_record(store: &dyn CatalogStore, record: &GameRecord, stats: &mut ImportStats) {
    if record.name.is_empty() {
        log::warn!("Skipping record with empty Name");
        stats.skipped_unnamed += 1;
        return;
    }

    let plan = plan_record(record);
    stats.field_warnings += plan.warnings;
    if persist_plan(store, &plan, stats) {
        stats.records_imported += 1;
    }
}
