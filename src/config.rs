//! Storage configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Where game state is persisted: the document key and the database
/// file behind it.
///
/// The key is explicit configuration rather than a hidden constant, so
/// independent game instances can share a medium without colliding.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Document key the state tree is stored under.
    #[serde(default = "default_storage_key")]
    storage_key: String,

    /// Path of the SQLite database file.
    #[serde(default = "default_database_path")]
    database_path: String,
}

#[instrument]
fn default_storage_key() -> String {
    "game-state-key".to_string()
}

#[instrument]
fn default_database_path() -> String {
    "noughts.db".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            database_path: default_database_path(),
        }
    }
}

impl StorageConfig {
    /// Creates a configuration from an explicit key and database path.
    #[instrument(skip(storage_key, database_path))]
    pub fn new(storage_key: impl Into<String>, database_path: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            database_path: database_path.into(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(storage_key = %config.storage_key, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.storage_key(), "game-state-key");
        assert_eq!(config.database_path(), "noughts.db");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "storage_key = \"round-two\"").expect("Write failed");
        writeln!(file, "database_path = \"/tmp/round-two.db\"").expect("Write failed");

        let config = StorageConfig::from_file(file.path()).expect("Load failed");
        assert_eq!(config.storage_key(), "round-two");
        assert_eq!(config.database_path(), "/tmp/round-two.db");
    }

    #[test]
    fn test_from_file_applies_defaults() {
        let file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config = StorageConfig::from_file(file.path()).expect("Load failed");
        assert_eq!(config, StorageConfig::default());
    }

    #[test]
    fn test_from_file_missing() {
        let result = StorageConfig::from_file("/no/such/config.toml");
        assert!(result.is_err());
    }
}
