//! Game configuration loaded from TOML.

use crossmark_engine::{Difficulty, GameMode, MatchSettings};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "crossmark.toml";

/// User preferences for a match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// AI difficulty.
    difficulty: Difficulty,

    /// Versus the computer, or two people.
    mode: GameMode,

    /// Fixed RNG seed for reproducible AI play.
    seed: Option<u64>,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else
    /// defaults.
    ///
    /// An explicitly named file that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        difficulty: Option<Difficulty>,
        two_player: bool,
        seed: Option<u64>,
    ) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if two_player {
            self.mode = GameMode::TwoPlayer;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Settings for a new match.
    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            mode: self.mode,
            difficulty: self.difficulty,
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
