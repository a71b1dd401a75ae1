#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "POOKALAM_LOG";

const CRATE_TARGET: &str = "pookalam";

/// Writes records to stderr, so they never interleave with the board on
/// stdout. Records from other crates only get through at `warn` and above.
struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    fn allows(&self, target: &str, level: Level) -> bool {
        if target == CRATE_TARGET || target.starts_with("pookalam::") {
            level <= self.level
        } else {
            level <= Level::Warn && level <= self.level
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.allows(metadata.target(), metadata.level())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// `[LEVEL module] message`, with the crate prefix dropped from the module.
fn format_line(level: Level, target: &str, message: &str) -> String {
    let module = target
        .strip_prefix("pookalam::")
        .unwrap_or(target);
    format!("[{:<5} {}] {}", level, module, message)
}

/// Parse a level filter, falling back to `info` for missing or unknown values.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with the level from `POOKALAM_LOG`.
/// Calling it again after a logger is installed does nothing.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}
