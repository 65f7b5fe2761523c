//! Sink boundary between the logging seam and the actual output.

use super::{Record, Severity, SinkError};

/// Receives log records that passed the minimum-level filter.
pub trait Sink: Send + Sync {
    fn emit(&self, record: &Record) -> Result<(), SinkError>;
}

/// Production sink: routes records to the matching `tracing` macro.
pub struct TracingSink;

impl Sink for TracingSink {
    fn emit(&self, record: &Record) -> Result<(), SinkError> {
        // `tracing` targets must be compile-time constants, so the
        // logger scope travels as a field instead.
        match record.severity {
            Severity::Critical => {
                tracing::error!(scope = %record.target, critical = true, "{}", record.message);
            }
            Severity::Error => {
                tracing::error!(scope = %record.target, "{}", record.message);
            }
            Severity::Warn => {
                tracing::warn!(scope = %record.target, "{}", record.message);
            }
            Severity::Info => {
                tracing::info!(scope = %record.target, "{}", record.message);
            }
            Severity::Debug => {
                tracing::debug!(scope = %record.target, "{}", record.message);
            }
            Severity::Trace => {
                tracing::trace!(scope = %record.target, "{}", record.message);
            }
        }

        Ok(())
    }
}
