mod app;
mod compose;
mod config;
mod logging;

#[cfg(test)]
mod testutil;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use compose::CompositionRoot;
use config::{ConfigBuilder, ConfigError, ConfigRoot};
use logging::{LoggerFactory, Severity, TracingSink};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

const CONFIG_FILE: &str = "appsettings.json";
const SECRETS_FILE: &str = "secrets.json";
const ENV_PREFIX: &str = "LOGSAMPLE_";

fn init_tracing(min_level: Severity) {
    let level = min_level.as_tracing_level();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Fixed source order: file, then environment, then secrets. Later
/// layers win on key collision.
fn load_config() -> Result<ConfigRoot, ConfigError> {
    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    ConfigBuilder::new(base_dir)
        .json_file(CONFIG_FILE, true)
        .env_prefix(ENV_PREFIX)
        .secrets_file(SECRETS_FILE)
        .build()
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let min_level = config
        .get("app.log_level")
        .and_then(|level| level.parse().ok())
        .unwrap_or(Severity::Info);

    init_tracing(min_level);

    let factory = Arc::new(LoggerFactory::new(Arc::new(TracingSink), min_level));
    let root = CompositionRoot::new(Arc::new(config), factory);

    // An unresolvable application is a startup failure, reported loudly
    // instead of skipping the run.
    let app = match root.resolve_app() {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Failed to resolve application");
            return ExitCode::FAILURE;
        }
    };

    app.run();

    ExitCode::SUCCESS
}
