//! Composition root.
//!
//! The one place where dependencies are wired together: the shared
//! configuration root and logger factory go in, fully constructed
//! application objects come out. Resolution failures surface as an
//! explicit error rather than an absent instance.

mod error;

pub use error::ResolutionError;

use std::sync::Arc;

use crate::app::{AppSettings, Application};
use crate::config::ConfigRoot;
use crate::logging::LoggerFactory;

/// Configuration section the application settings bind from.
const SETTINGS_SECTION: &str = "app";

/// Logger scope handed to resolved applications.
const APP_SCOPE: &str = "Application";

/// Holds the process-wide singletons and constructs application
/// instances on demand.
pub struct CompositionRoot {
    config: Arc<ConfigRoot>,
    logging: Arc<LoggerFactory>,
}

impl CompositionRoot {
    pub fn new(config: Arc<ConfigRoot>, logging: Arc<LoggerFactory>) -> Self {
        CompositionRoot { config, logging }
    }

    /// Builds a fresh [`Application`]: binds settings from the `app`
    /// section and hands it a logger scoped to the application.
    ///
    /// Settings are re-bound per resolution; the configuration root is
    /// immutable, so every resolution sees the same values.
    pub fn resolve_app(&self) -> Result<Application, ResolutionError> {
        let settings = AppSettings::bind(&self.config.section(SETTINGS_SECTION)).map_err(
            |source| ResolutionError::Binding {
                section: SETTINGS_SECTION.to_string(),
                source,
            },
        )?;

        let logger = self.logging.logger(APP_SCOPE);

        Ok(Application::new(logger, settings))
    }
}
