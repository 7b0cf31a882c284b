//! Game Configuration
//!
//! Players, their moves, and what the transcript includes. Loaded from TOML;
//! every field has a default, so a partial file is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RpsError;
use crate::hands::Move;

/// Configuration for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The two players.
    pub players: PlayersConfig,

    /// Moves thrown by each player, one per round.
    pub moves: MovesConfig,

    /// What to include in the transcript.
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: PlayersConfig::default(),
            moves: MovesConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Player names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: String,
    pub second: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            first: "Alice".to_string(),
            second: "Bob".to_string(),
        }
    }
}

/// Move sequences. Both must have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovesConfig {
    pub first: Vec<Move>,
    pub second: Vec<Move>,
}

impl Default for MovesConfig {
    fn default() -> Self {
        Self {
            first: vec![Move::Paper, Move::Scissors, Move::Paper, Move::Rock],
            second: vec![Move::Paper, Move::Rock, Move::Paper, Move::Scissors],
        }
    }
}

/// Transcript options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print a description of each throw.
    pub describe_throws: bool,

    /// Print the win/loss/tie totals after the last round.
    pub summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            describe_throws: true,
            summary: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, RpsError> {
        toml::from_str(text).map_err(|source| RpsError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, RpsError> {
        let text = fs::read_to_string(path).map_err(|source| RpsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Render this configuration as TOML.
    pub fn to_toml(&self) -> Result<String, RpsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
