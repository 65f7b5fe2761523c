//! Logging error types.

use thiserror::Error;

/// Failure reported by a sink while emitting a record.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to emit log record: {0}")]
    Emit(String),
}
