//! Spinner progress display for imports.
//!
//! Shows the current line number and game name while an import runs. The
//! line count is unknown up front, so this is a spinner rather than a bar.

use std::time::Duration;

use hltb_import::ImportProgress;
use indicatif::{ProgressBar, ProgressStyle};

use crate::logging;

/// Terminal spinner. Registered with the logger while alive so log lines
/// print above it instead of through it.
pub(crate) struct SpinnerProgress {
    pb: ProgressBar,
}

impl SpinnerProgress {
    pub(crate) fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("  {spinner:.cyan} line {pos}  {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        logging::set_active_bar(Some(pb.clone()));
        Self { pb }
    }
}

impl ImportProgress for SpinnerProgress {
    fn on_record(&self, line: u64, name: &str) {
        self.pb.set_position(line);
        self.pb.set_message(name.to_string());
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        logging::set_active_bar(None);
        self.pb.finish_and_clear();
        log::info!("{}", message);
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        logging::set_active_bar(None);
        self.pb.finish_and_clear();
    }
}
