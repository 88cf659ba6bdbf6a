//! Diagnostics sink injected into the controllers.
//!
//! Behavior code never calls the logging macros directly. The Bevy host
//! passes a [`BevyLog`], tests pass a [`RecordingSink`] and inspect it.

use bevy::prelude::*;

/// Receiver for controller log lines.
pub trait DiagnosticsSink {
    fn log_info(&mut self, message: &str);
    fn log_warn(&mut self, message: &str);
    fn log_error(&mut self, message: &str);
}

/// Forwards to Bevy's log macros, prefixed with a scope name.
#[derive(Debug, Clone, Copy)]
pub struct BevyLog {
    scope: &'static str,
}

impl BevyLog {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }
}

impl DiagnosticsSink for BevyLog {
    fn log_info(&mut self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }

    fn log_warn(&mut self, message: &str) {
        warn!("[{}] {}", self.scope, message);
    }

    fn log_error(&mut self, message: &str) {
        error!("[{}] {}", self.scope, message);
    }
}

/// Severity of a recorded entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// In-memory sink, mostly for tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub entries: Vec<(LogLevel, String)>,
}

impl RecordingSink {
    /// Number of entries at the given level.
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|(l, _)| *l == level).count()
    }

    /// Whether any entry contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|(_, msg)| msg.contains(needle))
    }
}

impl DiagnosticsSink for RecordingSink {
    fn log_info(&mut self, message: &str) {
        self.entries.push((LogLevel::Info, message.to_string()));
    }

    fn log_warn(&mut self, message: &str) {
        self.entries.push((LogLevel::Warn, message.to_string()));
    }

    fn log_error(&mut self, message: &str) {
        self.entries.push((LogLevel::Error, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_counts_by_level() {
        let mut sink = RecordingSink::default();
        sink.log_info("boss state: Chase");
        sink.log_warn("no animator");
        sink.log_info("coin collected");

        assert_eq!(sink.count(LogLevel::Info), 2);
        assert_eq!(sink.count(LogLevel::Warn), 1);
        assert_eq!(sink.count(LogLevel::Error), 0);
        assert!(sink.contains("animator"));
        assert!(!sink.contains("obstacle"));
    }
}
