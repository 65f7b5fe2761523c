//! Severity-routed logging seam.
//!
//! Defines the six-level severity model, the log record type and the
//! sink boundary. Loggers are handed out by a process-wide factory and
//! filter records below the configured minimum before they reach the
//! sink. Production output goes through [`TracingSink`] to `tracing`.

mod error;
mod sink;

pub use error::SinkError;
pub use sink::{Sink, TracingSink};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Log severity, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl Severity {
    /// Maps to the closest `tracing` level. `tracing` has no sixth
    /// level, so `Critical` collapses to `ERROR`.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            Severity::Trace => tracing::Level::TRACE,
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error | Severity::Critical => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Trace => write!(f, "trace"),
            Severity::Debug => write!(f, "debug"),
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// A single log record on its way to the sink.
#[derive(Debug, Clone)]
pub struct Record {
    pub severity: Severity,
    /// Scope name of the logger that emitted the record.
    pub target: String,
    pub message: String,
}

/// A named logger bound to a shared sink.
///
/// Records below the minimum severity are dropped before reaching the
/// sink and count as successfully emitted.
#[derive(Clone)]
pub struct Logger {
    target: String,
    min_level: Severity,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Emits a record, discarding any sink failure. Logging must not
    /// take the caller down.
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        let _ = self.try_log(severity, message);
    }

    /// Emits a record, surfacing sink failures to the caller.
    pub fn try_log(
        &self,
        severity: Severity,
        message: impl Into<String>,
    ) -> Result<(), SinkError> {
        if severity < self.min_level {
            return Ok(());
        }

        self.sink.emit(&Record {
            severity,
            target: self.target.clone(),
            message: message.into(),
        })
    }

    pub fn critical(&self, message: impl Into<String>) {
        self.log(Severity::Critical, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::Warn, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    pub fn trace(&self, message: impl Into<String>) {
        self.log(Severity::Trace, message);
    }
}

/// Process-wide logger factory: one shared sink, one minimum severity.
pub struct LoggerFactory {
    sink: Arc<dyn Sink>,
    min_level: Severity,
}

impl LoggerFactory {
    pub fn new(sink: Arc<dyn Sink>, min_level: Severity) -> Self {
        LoggerFactory { sink, min_level }
    }

    /// Hands out a logger scoped to `target`.
    pub fn logger(&self, target: &str) -> Logger {
        Logger {
            target: target.to_string(),
            min_level: self.min_level,
            sink: Arc::clone(&self.sink),
        }
    }
}
