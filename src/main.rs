//! Tictac - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictac::{Cli, Console, GameConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?
        .with_overrides(cli.cpu, cli.seed, cli.games)?;

    initialize_tracing(&config);
    info!(cpu = %config.cpu(), seed = ?config.seed(), "Starting tictac");

    let mut session = Session::from_config(&config)?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    let tally = session.run(&mut console)?;

    info!(games = tally.games(), draws = tally.draws(), "Session finished");
    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing(config: &GameConfig) {
    let fallback = config
        .log_filter()
        .clone()
        .unwrap_or_else(|| "warn,tictac=info,tictac_core=info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}
