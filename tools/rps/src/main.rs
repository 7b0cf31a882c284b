//! Rock-Paper-Scissors Binary
//!
//! Run with: `rps [OPTIONS]`

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use rps::{play_config, render, Config, Move, Outcome};

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Rock-paper-scissors decided by double dispatch")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Moves for the first player, comma separated
    #[arg(long, value_delimiter = ',')]
    first: Option<Vec<Move>>,

    /// Moves for the second player, comma separated
    #[arg(long, value_delimiter = ',')]
    second: Option<Vec<Move>>,

    /// Name of the first player
    #[arg(long)]
    first_name: Option<String>,

    /// Name of the second player
    #[arg(long)]
    second_name: Option<String>,

    /// Do not describe each throw
    #[arg(long)]
    no_describe: bool,

    /// Print win/loss/tie totals
    #[arg(long)]
    summary: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    if let Some(Commands::Config) = &cli.command {
        print!("{}", Config::default().to_toml()?);
        return Ok(());
    }

    let config = build_config(&cli)?;
    let rounds = play_config(&config).context("Failed to play game")?;

    for round in &rounds {
        let winner = match round.outcome {
            Outcome::FirstLoses => Some(&config.players.second),
            Outcome::SecondLoses => Some(&config.players.first),
            Outcome::Tie => None,
        };
        info!(round = round.index, winner = ?winner, "round played");
    }

    print!("{}", render(&config.players, &config.output, &rounds));
    Ok(())
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::load(config_path).context("Failed to load config file")?
    } else {
        debug!("No config file given, using defaults");
        Config::default()
    };

    // Override with CLI options
    match (&cli.first, &cli.second) {
        (Some(_), None) | (None, Some(_)) => {
            warn!("Moves given for only one player; the other keeps its configured moves");
        }
        _ => {}
    }
    if let Some(moves) = &cli.first {
        config.moves.first = moves.clone();
    }
    if let Some(moves) = &cli.second {
        config.moves.second = moves.clone();
    }
    if let Some(name) = &cli.first_name {
        config.players.first = name.clone();
    }
    if let Some(name) = &cli.second_name {
        config.players.second = name.clone();
    }
    if cli.no_describe {
        config.output.describe_throws = false;
    }
    if cli.summary {
        config.output.summary = true;
    }

    debug!(
        first = ?config.moves.first,
        second = ?config.moves.second,
        "Resolved configuration"
    );
    Ok(config)
}
