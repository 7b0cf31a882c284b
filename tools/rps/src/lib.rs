//! Rock-Paper-Scissors
//!
//! A small game driven by `variant-ref`: each throw is a [`HandRef`] into a
//! fixed set of hands, throws are described by single dispatch and rounds are
//! decided by double dispatch on the two throws.
//!
//! # Example
//!
//! ```rust
//! use rps::{render, play_config, Config};
//!
//! let config = Config::default();
//! let rounds = play_config(&config).unwrap();
//! let transcript = render(&config.players, &config.output, &rounds);
//! assert!(transcript.ends_with("Game complete!\n"));
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod hands;

pub use config::{Config, MovesConfig, OutputConfig, PlayersConfig};
pub use error::RpsError;
pub use game::{judge, play, play_config, render, Outcome, Round, Score};
pub use hands::{GetDescription, HandRef, Hands, LosesTo, Move, Paper, Rock, Scissors};
