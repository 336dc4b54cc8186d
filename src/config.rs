//! Game configuration.

use crate::search::{AlphaBeta, Minimax, Strategy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which search the computer uses.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyKind {
    /// Full minimax.
    Minimax,
    /// Win/block checks plus alpha-beta.
    #[default]
    AlphaBeta,
}

/// Settings for one game, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Search used by the computer.
    strategy: StrategyKind,

    /// Whether the computer (O) opens the game.
    computer_first: bool,

    /// Name shown for the human.
    human_name: String,

    /// Name shown for the computer.
    computer_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            computer_first: false,
            human_name: "Human".to_string(),
            computer_name: "Computer".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Overrides who opens the game.
    pub fn with_computer_first(mut self, computer_first: bool) -> Self {
        self.computer_first = computer_first;
        self
    }

    /// Builds the configured search strategy. Depths are fixed per strategy.
    pub fn build_strategy(&self) -> Box<dyn Strategy> {
        match self.strategy {
            StrategyKind::Minimax => Box::new(Minimax),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta),
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
