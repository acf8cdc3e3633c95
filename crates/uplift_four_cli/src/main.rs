//! Uplift Four - terminal driver
//!
//! Reads two-character move tokens from stdin and renders the board to
//! stdout. Logs go to stderr, filtered by `RUST_LOG`.

#![warn(missing_docs)]

mod cli;
mod driver;
mod input;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uplift_four::Game;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    info!(?config, "Starting Uplift Four");

    let mut game = Game::from_config(&config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    driver::run_game(&mut game, stdin.lock(), &mut stdout)?;

    Ok(())
}
