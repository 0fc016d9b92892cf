//! Command-line interface for tictac.

use crate::config::CpuSeats;
use clap::Parser;
use std::path::PathBuf;

/// Tictac - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe against a friend or the CPU", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Seats played by the CPU
    #[arg(long, value_enum)]
    pub cpu: Option<CpuSeats>,

    /// Seed for reproducible CPU moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many games
    #[arg(short, long)]
    pub games: Option<u32>,
}
