//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

mod schema_gemini;

pub use schema_gemini::*;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding persisted settings (the API key among them).
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> String {
    "~/.pagebrief/storage.json".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily rolling log files. `None` disables file output.
    #[serde(default = "default_log_directory")]
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> Option<String> {
    Some("~/.pagebrief/logs".to_string())
}

/// Default location of the config file (`~/.pagebrief/config.toml`).
pub fn default_config_path() -> PathBuf {
    pagebrief_dir().join("config.toml")
}

/// The `~/.pagebrief` directory, or `./.pagebrief` without a home directory.
pub fn pagebrief_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".pagebrief"))
        .unwrap_or_else(|| PathBuf::from(".pagebrief"))
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
