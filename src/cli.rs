//! Command-line interface for sanmoku.

use clap::Parser;
use sanmoku::Difficulty;
use std::path::PathBuf;

/// Play tic-tac-toe against a three-tier computer opponent.
#[derive(Parser, Debug)]
#[command(name = "sanmoku")]
#[command(about = "Tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent difficulty (low, medium, high)
    #[arg(short, long, default_value = "low")]
    pub level: Difficulty,

    /// Let the computer take the first move (it then plays X)
    #[arg(long)]
    pub computer_first: bool,

    /// Fixed RNG seed for reproducible matches
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cosmetic delay before the computer moves, in milliseconds
    #[arg(long, default_value_t = 400)]
    pub delay_ms: u64,

    /// Path of the JSON win/loss/draw tally
    #[arg(long, default_value = "sanmoku_history.json")]
    pub history: PathBuf,

    /// Skip reading and writing the tally file
    #[arg(long)]
    pub no_history: bool,
}
