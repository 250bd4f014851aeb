//! A `log` backend that keeps recent lines for the table's log panel.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Shared handle to the captured log lines, oldest first.
pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

pub struct TuiLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl TuiLogger {
    /// Lines kept before the oldest is dropped.
    pub const CAPACITY: usize = 100;

    pub fn new(level: LevelFilter) -> (Self, LogBuffer) {
        let buffer: LogBuffer = Arc::new(Mutex::new(VecDeque::with_capacity(Self::CAPACITY)));
        (Self { buffer: Arc::clone(&buffer), level }, buffer)
    }

    /// Install as the global logger and hand back the buffer it writes to.
    pub fn install(level: LevelFilter) -> Result<LogBuffer, log::SetLoggerError> {
        let (logger, buffer) = Self::new(level);
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(level);
        Ok(buffer)
    }
}

impl Log for TuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = match record.level() {
            Level::Error | Level::Warn => format!("{}: {}", record.level(), record.args()),
            _ => record.args().to_string(),
        };
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == Self::CAPACITY {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
    }

    fn flush(&self) {}
}

/// The last `n` lines in the buffer.
pub fn recent_lines(buffer: &LogBuffer, n: usize) -> Vec<String> {
    match buffer.lock() {
        Ok(lines) => lines.iter().skip(lines.len().saturating_sub(n)).cloned().collect(),
        Err(_) => Vec::new(),
    }
}
