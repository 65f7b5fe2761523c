//! Layered configuration loading.
//!
//! Merges an optional JSON file, prefixed environment variables and an
//! optional secrets file into a single read-only key/value view. Sources
//! apply in the order they were added; later sources override earlier
//! ones on key collision.

mod error;

pub use error::ConfigError;

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::{env, fs};

/// One configuration layer, applied in insertion order.
enum Source {
    /// JSON file resolved against the base directory.
    JsonFile { name: String, optional: bool },
    /// Environment variables matching a prefix.
    Environment { prefix: String },
    /// Secrets file, always treated as optional.
    SecretsFile { name: String },
}

/// Builder for a [`ConfigRoot`].
pub struct ConfigBuilder {
    base_dir: PathBuf,
    sources: Vec<Source>,
}

impl ConfigBuilder {
    /// Creates a builder resolving relative file names against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        ConfigBuilder {
            base_dir: base_dir.into(),
            sources: Vec::new(),
        }
    }

    /// Adds a JSON file layer. A missing or malformed optional file is
    /// skipped; a missing or malformed required file fails the build.
    pub fn json_file(mut self, name: &str, optional: bool) -> Self {
        self.sources.push(Source::JsonFile {
            name: name.to_string(),
            optional,
        });
        self
    }

    /// Adds an environment-variable layer. Every variable starting with
    /// `prefix` is included with the prefix stripped, `__` mapped to `.`
    /// and the key lowercased (e.g. `LOGSAMPLE_APP__NAME` -> `app.name`).
    pub fn env_prefix(mut self, prefix: &str) -> Self {
        self.sources.push(Source::Environment {
            prefix: prefix.to_string(),
        });
        self
    }

    /// Adds a secrets file layer. Always optional: absent or unreadable
    /// secrets are treated as an empty layer.
    pub fn secrets_file(mut self, name: &str) -> Self {
        self.sources.push(Source::SecretsFile {
            name: name.to_string(),
        });
        self
    }

    /// Applies all sources in order and returns the merged view.
    pub fn build(self) -> Result<ConfigRoot, ConfigError> {
        let mut values = BTreeMap::new();

        for source in &self.sources {
            match source {
                Source::JsonFile { name, optional } => {
                    self.apply_json_file(name, *optional, &mut values)?;
                }
                Source::Environment { prefix } => {
                    apply_env_layer(prefix, env::vars(), &mut values);
                }
                Source::SecretsFile { name } => {
                    self.apply_json_file(name, true, &mut values)?;
                }
            }
        }

        Ok(ConfigRoot { values })
    }

    fn apply_json_file(
        &self,
        name: &str,
        optional: bool,
        values: &mut BTreeMap<String, String>,
    ) -> Result<(), ConfigError> {
        let path = self.base_dir.join(name);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) if optional => return Ok(()),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let document: Value = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(_) if optional => return Ok(()),
            Err(source) => return Err(ConfigError::Parse { path, source }),
        };

        if !document.is_object() {
            if optional {
                return Ok(());
            }
            return Err(ConfigError::InvalidDocument { path });
        }

        flatten_json("", &document, values);
        Ok(())
    }
}

/// Flattens a JSON document into dotted lowercase keys. Strings are kept
/// verbatim, numbers and booleans are stringified, array elements get
/// their index as a key segment and nulls are skipped.
fn flatten_json(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_json(&join_key(prefix, &key.to_lowercase()), value, out);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_json(&join_key(prefix, &index.to_string()), value, out);
            }
        }
        Value::Null => {}
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

/// Applies environment variables matching `prefix` as a layer.
fn apply_env_layer(
    prefix: &str,
    vars: impl Iterator<Item = (String, String)>,
    out: &mut BTreeMap<String, String>,
) {
    for (key, value) in vars {
        if let Some(stripped) = key.strip_prefix(prefix) {
            let key = stripped.replace("__", ".").to_lowercase();
            if !key.is_empty() {
                out.insert(key, value);
            }
        }
    }
}

/// The final merged, read-only view over all configuration sources.
///
/// Built once at startup and never rebuilt; the only cross-layer rule is
/// last-applied-source-wins per key.
#[derive(Debug, Clone)]
pub struct ConfigRoot {
    values: BTreeMap<String, String>,
}

impl ConfigRoot {
    /// Returns the value for a dotted key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the sub-view of keys under `name`, with the section
    /// prefix stripped. An unknown section yields an empty view.
    pub fn section(&self, name: &str) -> ConfigSection {
        let prefix = format!("{}.", name);
        let values = self
            .values
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .map(|suffix| (suffix.to_string(), value.clone()))
            })
            .collect();

        ConfigSection { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A named sub-view of a [`ConfigRoot`].
#[derive(Debug, Clone)]
pub struct ConfigSection {
    values: BTreeMap<String, String>,
}

impl ConfigSection {
    /// Returns the value for a key relative to the section, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rebuilds the section as a nested JSON object so it can be
    /// deserialized into a typed settings struct. Dotted keys become
    /// nested objects; all leaf values stay strings.
    pub fn to_json(&self) -> Value {
        let mut root = Value::Object(serde_json::Map::new());

        for (key, value) in &self.values {
            let mut node = &mut root;
            let mut segments = key.split('.').peekable();

            while let Some(segment) = segments.next() {
                let Value::Object(map) = node else {
                    // A scalar already sits at this path; the nested key
                    // cannot attach under it, so it is dropped.
                    break;
                };

                if segments.peek().is_none() {
                    map.insert(segment.to_string(), Value::String(value.clone()));
                    break;
                }

                node = map
                    .entry(segment.to_string())
                    .or_insert_with(|| Value::Object(serde_json::Map::new()));
            }
        }

        root
    }
}
