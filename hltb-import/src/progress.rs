//! Import progress reporting.

/// Trait for receiving import progress updates.
pub trait ImportProgress {
    /// Called after each record is imported. `line` is 1-based.
    fn on_record(&self, line: u64, name: &str);

    /// Called when a phase starts (e.g., "Importing games.jsonl").
    fn on_phase(&self, message: &str);

    /// Called when the import is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_record(&self, _line: u64, _name: &str) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// Reports through the `log` crate, one info line every `interval` input
/// lines. Used when output is not a terminal.
pub struct LogProgress {
    interval: u64,
}

impl LogProgress {
    pub const DEFAULT_INTERVAL: u64 = 1000;

    /// An `interval` of 0 never reports individual lines.
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }

    /// Whether `line` gets a progress message.
    pub fn reports(&self, line: u64) -> bool {
        self.interval > 0 && line > 0 && line.is_multiple_of(self.interval)
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

impl ImportProgress for LogProgress {
    fn on_record(&self, line: u64, name: &str) {
        if self.reports(line) {
            log::info!("  [line {}] {}", line, name);
        }
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
