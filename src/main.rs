//! Gridduel - console tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gridduel::{Console, GameConfig, GameSession};
use gridduel_core::Difficulty;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?.with_overrides(
        cli.difficulty,
        cli.first,
        cli.seed,
    );

    play(&config)
}

/// Runs one session on stdin/stdout.
#[instrument(skip(config))]
fn play(config: &GameConfig) -> Result<()> {
    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());

    let difficulty = match config.difficulty() {
        Some(selection) => Difficulty::from_selection(selection),
        None => console.choose_difficulty()?,
    };

    let mut session = GameSession::new(difficulty, *config.first_player(), config.rng());
    let outcome = console.run(&mut session)?;
    info!(%outcome, moves = session.history().len(), "Session finished");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
