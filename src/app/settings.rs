//! Typed application settings bound from configuration.

use crate::config::ConfigSection;
use serde::Deserialize;

/// Settings for the demo application, bound from the `app` section.
///
/// Created once per resolution from the immutable configuration root
/// and never mutated. Unset fields take their defaults instead of
/// failing the bind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Display name interpolated into the final log message.
    pub name: String,
}

impl AppSettings {
    /// Binds a configuration section into typed settings. Fails only on
    /// a shape mismatch, never on missing keys.
    pub fn bind(section: &ConfigSection) -> Result<Self, serde_json::Error> {
        serde_json::from_value(section.to_json())
    }
}
