//! Structured JSON logger.
//!
//! One log line = one event. Severity is always present, keys are
//! emitted in deterministic (sorted) order, and writes are synchronous
//! and unbuffered.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured logger writing one JSON object per event.
pub struct Logger;

impl Logger {
    /// Log an event to stdout.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::write_line(severity, event, fields, &mut io::stdout());
    }

    /// Log an event to stderr (for errors and fatal conditions).
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::write_line(severity, event, fields, &mut io::stderr());
    }

    /// Renders one event as a JSON object; the map is key-sorted, so
    /// output is deterministic for a given event.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut line = Map::new();
        line.insert("event".to_string(), Value::String(event.to_string()));
        line.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );
        for (key, value) in fields {
            line.insert((*key).to_string(), Value::String((*value).to_string()));
        }
        Value::Object(line).to_string()
    }

    fn write_line<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        let line = Self::render(severity, event, fields);
        let _ = writeln!(writer, "{}", line);
    }
}
