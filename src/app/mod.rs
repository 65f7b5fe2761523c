//! The demo application.
//!
//! Receives its logger and settings from the composition root, emits a
//! fixed sequence of log records across all severities and finishes
//! with one message interpolating the configured name.

mod settings;

pub use settings::AppSettings;

use crate::logging::{Logger, Severity};

/// Single-shot application object. Constructed fresh per resolution,
/// holds no state beyond its injected dependencies.
pub struct Application {
    logger: Logger,
    settings: AppSettings,
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Application {
    pub fn new(logger: Logger, settings: AppSettings) -> Self {
        Application { logger, settings }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Emits six records in fixed severity order, then one info record
    /// interpolating the settings name. A failure emitting that last
    /// record is downgraded to an error record; nothing escapes `run`.
    pub fn run(&self) {
        self.logger.critical("Log Critical");
        self.logger.error("Log Error");
        self.logger.warn("Log Warning");
        self.logger.info("Log Information");
        self.logger.debug("Log Debug");
        self.logger.trace("Log Trace");

        let message = format!(
            "This is a console application for {}",
            self.settings.name
        );
        if let Err(e) = self.logger.try_log(Severity::Info, message) {
            self.logger.error(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests;
