//! Errors for the rock-paper-scissors tool.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or playing a game.
#[derive(Debug, Error)]
pub enum RpsError {
    #[error("unknown move `{0}` (expected rock, paper or scissors)")]
    UnknownMove(String),

    #[error("{first} threw {first_len} moves but {second} threw {second_len}")]
    RoundMismatch {
        first: String,
        first_len: usize,
        second: String,
        second_len: usize,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to render config: {0}")]
    ConfigRender(#[from] toml::ser::Error),
}
