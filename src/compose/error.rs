//! Resolution error types.

use thiserror::Error;

/// Failure constructing an application instance.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("failed to bind settings from section '{section}': {source}")]
    Binding {
        section: String,
        source: serde_json::Error,
    },
}
