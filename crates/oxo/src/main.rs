//! OXO command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use oxo::cli::{Cli, Command, PlayArgs};
use oxo::{Settings, logging, simulate, tui};
use oxo_core::Symbol;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play(args) => run_play(args).await,
        Command::Simulate {
            rounds,
            symbol,
            seed,
        } => run_simulate(rounds, symbol, seed),
    }
}

/// Run the terminal UI
#[instrument(skip_all, fields(config_path = %args.config.display()))]
async fn run_play(args: PlayArgs) -> Result<()> {
    let settings = Settings::load(&args.config)?.with_overrides(
        args.delay_ms,
        args.seed,
        args.log_file,
        args.log_filter,
    );
    tui::run_tui(settings).await
}

/// Run headless rounds and print the tally
fn run_simulate(rounds: u32, symbol: Symbol, seed: Option<u64>) -> Result<()> {
    logging::init_stderr("info");
    info!(rounds, %symbol, ?seed, "Starting simulation");

    let tally = simulate::simulate(rounds, symbol, seed)?;
    println!("{} rounds as {}: {}", tally.rounds(), symbol.name(), tally);
    Ok(())
}
