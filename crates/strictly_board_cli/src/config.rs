//! Application configuration.

use crate::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use strictly_board::{Board, Marker};
use tracing::{debug, info, instrument};

/// Settings for a session, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board dimension.
    #[serde(default = "default_size")]
    size: usize,

    /// Players in turn order.
    #[serde(default = "default_players")]
    players: Vec<Player>,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_size() -> usize {
    Board::STANDARD_SIZE
}

fn default_players() -> Vec<Player> {
    vec![Player::for_marker(Marker::X), Player::for_marker(Marker::O)]
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            players: default_players(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(size = config.size, players = config.players.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with the board size replaced.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Checks the board size is within `1..=Board::MAX_SIZE` and that players
    /// have distinct markers.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::square_count(self.size).map_err(|e| ConfigError::new(e.to_string()))?;
        if self.players.len() < 2 {
            return Err(ConfigError::new(format!(
                "At least two players are required, found {}",
                self.players.len()
            )));
        }
        let mut seen = HashSet::new();
        for player in &self.players {
            if !seen.insert(*player.marker()) {
                return Err(ConfigError::new(format!(
                    "Marker {} is used by more than one player",
                    player.marker()
                )));
            }
        }
        Ok(())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
