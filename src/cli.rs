//! Command-line interface for gridduel.

use clap::Parser;
use gridduel_core::FirstPlayer;

/// Gridduel - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "gridduel")]
#[command(about = "Play tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent strength: "hard", anything else plays easy. Asked for when unset.
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Who moves first (human or computer)
    #[arg(long)]
    pub first: Option<FirstPlayer>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the config file (ignored if missing)
    #[arg(short, long, default_value = "gridduel.toml")]
    pub config: std::path::PathBuf,
}
