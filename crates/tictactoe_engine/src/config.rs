//! Engine configuration loaded from TOML.

use super::Mark;
use super::id::GameId;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for new games.
///
/// ```toml
/// first_mover = "PlayerB"
/// id_length = 16
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Mark that moves first.
    #[serde(default)]
    first_mover: Mark,

    /// Number of letters in generated game ids.
    #[serde(default = "default_id_length")]
    id_length: usize,
}

fn default_id_length() -> usize {
    GameId::DEFAULT_LENGTH
}

impl EngineConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(first_mover: Mark, id_length: usize) -> Self {
        Self {
            first_mover,
            id_length,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            first_mover = %config.first_mover,
            id_length = config.id_length,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.id_length == 0 {
            return Err(ConfigError::new("id_length must be at least 1"));
        }
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Mark::default(), default_id_length())
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
