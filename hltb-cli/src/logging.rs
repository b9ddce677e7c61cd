//! Logger setup.
//!
//! Output goes through `env_logger`, wrapped so that a running spinner is
//! cleared while a line is written and redrawn afterwards.

use std::io::Write;
use std::sync::Mutex;

use indicatif::ProgressBar;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Spinner currently on screen, if any.
static ACTIVE_BAR: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Register (or clear, with `None`) the progress bar to suspend while logging.
pub(crate) fn set_active_bar(bar: Option<ProgressBar>) {
    if let Ok(mut active) = ACTIVE_BAR.lock() {
        *active = bar;
    }
}

fn active_bar() -> Option<ProgressBar> {
    ACTIVE_BAR.lock().ok().and_then(|active| active.clone())
}

/// `env_logger` wrapper that suspends the active spinner around each record.
pub(crate) struct SuspendingLogger {
    inner: env_logger::Logger,
}

impl SuspendingLogger {
    pub(crate) fn new(inner: env_logger::Logger) -> Self {
        Self { inner }
    }

    pub(crate) fn filter(&self) -> LevelFilter {
        self.inner.filter()
    }
}

impl Log for SuspendingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.inner.matches(record) {
            return;
        }
        match active_bar() {
            Some(bar) => bar.suspend(|| self.inner.log(record)),
            None => self.inner.log(record),
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Configure logging for the process.
///
/// Info-level messages are the command's normal output and print bare.
/// `RUST_LOG` is applied on top of the level chosen by the flags.
pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }
    builder.parse_default_env();

    let logger = SuspendingLogger::new(builder.build());
    let max_level = logger.filter();
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
