//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and forwards every accepted record to a sink (e.g. the browser console).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Sink invoked for every accepted line
pub type Sink = Box<dyn Fn(&LogLine) + Send + Sync>;

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {:<5} {}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    buffer: Mutex<VecDeque<LogLine>>,
    sink: Option<Sink>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            capacity: capacity.max(1),
            level,
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            sink: None,
        }
    }

    /// Forward every accepted line to `sink` in addition to buffering it
    pub fn with_sink(mut self, sink: impl Fn(&LogLine) + Send + Sync + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        self.lines().iter().cloned().collect()
    }

    /// Buffered lines at or above `level` (e.g. `Level::Warn` keeps warnings and errors)
    pub fn recent_at_least(&self, level: Level) -> Vec<LogLine> {
        self.lines()
            .iter()
            .filter(|line| line.level <= level)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.lines().clear();
    }

    fn push(&self, line: LogLine) {
        if let Some(sink) = &self.sink {
            sink(&line);
        }
        let mut lines = self.lines();
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    fn lines(&self) -> std::sync::MutexGuard<'_, VecDeque<LogLine>> {
        // A panic while holding the lock cannot leave the deque half-written
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.push(LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install `logger` as the global `log` backend.
///
/// Fails if a global logger was already set (by this crate or another).
pub fn init(logger: RollingLogger) -> Result<&'static RollingLogger, SetLoggerError> {
    let level = logger.level;
    let installed = LOGGER.get_or_init(|| logger);
    log::set_logger(installed)?;
    log::set_max_level(level);
    Ok(installed)
}

/// The globally installed logger, if `init` succeeded
pub fn global() -> Option<&'static RollingLogger> {
    LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn emit(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_most_recent_lines() {
        let logger = RollingLogger::new(3, LevelFilter::Trace);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }

        let lines = logger.recent();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].message, "line 2");
        assert_eq!(lines[2].message, "line 4");
    }

    #[test]
    fn test_level_filter_drops_verbose_records() {
        let logger = RollingLogger::new(10, LevelFilter::Warn);
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Warn, "careful");
        emit(&logger, Level::Error, "broken");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].level, Level::Warn);
    }

    #[test]
    fn test_recent_at_least_warn() {
        let logger = RollingLogger::new(10, LevelFilter::Trace);
        emit(&logger, Level::Info, "fetched");
        emit(&logger, Level::Error, "failed");

        let problems = logger.recent_at_least(Level::Warn);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].message, "failed");
    }

    #[test]
    fn test_sink_sees_every_accepted_line() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let logger = RollingLogger::new(1, LevelFilter::Info)
            .with_sink(move |_| { counter.fetch_add(1, Ordering::SeqCst); });

        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        emit(&logger, Level::Trace, "filtered");

        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(logger.recent().len(), 1);
    }

    #[test]
    fn test_display_contains_level_target_and_message() {
        let logger = RollingLogger::new(2, LevelFilter::Info);
        emit(&logger, Level::Error, "restock failed");
        let text = logger.recent()[0].to_string();
        assert!(text.contains("ERROR"));
        assert!(text.contains("test"));
        assert!(text.ends_with("restock failed"));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let logger = RollingLogger::new(0, LevelFilter::Info);
        assert_eq!(logger.capacity(), 1);
        emit(&logger, Level::Info, "only");
        assert_eq!(logger.recent().len(), 1);
    }
}
