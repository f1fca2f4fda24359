//! Game configuration from file and command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridduel_core::FirstPlayer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one session.
///
/// Every field is optional in the TOML file:
///
/// ```toml
/// difficulty = "hard"
/// first_player = "computer"
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Raw difficulty selection. Prompted for when absent.
    difficulty: Option<String>,

    /// Who places the first mark.
    first_player: FirstPlayer,

    /// Seed for the computer's random choices.
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(difficulty: Option<String>, first_player: FirstPlayer, seed: Option<u64>) -> Self {
        Self {
            difficulty,
            first_player,
            seed,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line values on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        difficulty: Option<String>,
        first_player: Option<FirstPlayer>,
        seed: Option<u64>,
    ) -> Self {
        if difficulty.is_some() {
            self.difficulty = difficulty;
        }
        if let Some(first_player) = first_player {
            self.first_player = first_player;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds the session's random generator.
    ///
    /// Seeded configurations replay identically.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
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
