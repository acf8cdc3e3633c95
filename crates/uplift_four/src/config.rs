//! Game configuration.

use crate::types::Representation;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board extents, run length and storage strategy for a new game.
///
/// Values are not checked here; [`Game::from_config`](crate::Game::from_config)
/// rejects impossible combinations.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct GameConfig {
    /// Pieces in a row needed to win.
    #[serde(default = "default_run")]
    run: usize,

    /// Number of columns.
    #[serde(default = "default_width")]
    width: usize,

    /// Number of rows.
    #[serde(default = "default_height")]
    height: usize,

    /// Board storage strategy.
    #[serde(default)]
    representation: Representation,
}

fn default_run() -> usize {
    4
}

fn default_width() -> usize {
    7
}

fn default_height() -> usize {
    6
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            run: default_run(),
            width: default_width(),
            height: default_height(),
            representation: Representation::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            run = config.run,
            width = config.width,
            height = config.height,
            representation = %config.representation,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
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
