//! Command-line interface for oxo.

use crate::settings::DEFAULT_CONFIG_PATH;
use clap::{Args, Parser, Subcommand};
use oxo_core::Symbol;
use std::path::PathBuf;

/// OXO - circle/cross against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Circle/cross in the terminal against a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Play rounds headlessly with a random human and print the tally
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// Symbol for the simulated human (circle or cross)
        #[arg(short, long, default_value = "circle")]
        symbol: Symbol,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Options for the terminal UI.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PlayArgs {
    /// Path to the settings file (missing file means defaults)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Computer thinking delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file (the terminal is busy with the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "oxo_core=trace")
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            delay_ms: None,
            seed: None,
            log_file: None,
            log_filter: None,
        }
    }
}
