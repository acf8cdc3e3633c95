//! Command-line interface for the uplift_four driver.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, instrument};
use uplift_four::{GameConfig, Representation};

/// Uplift Four - Connect-4 with board rotation and uplift moves
#[derive(Parser, Debug)]
#[command(name = "uplift_four")]
#[command(about = "Play uplift-four in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board width (columns)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Board height (rows)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Pieces in a row needed to win
    #[arg(short, long)]
    pub run: Option<usize>,

    /// Board storage strategy (dense or packed)
    #[arg(long, conflicts_with_all = ["dense", "packed"])]
    pub representation: Option<Representation>,

    /// Store the board one cell per slot
    #[arg(short = 'm', long, conflicts_with = "packed")]
    pub dense: bool,

    /// Store the board two bits per cell
    #[arg(short = 'b', long)]
    pub packed: bool,

    /// TOML file with run, width, height and representation
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merges the config file (or defaults) with flags given on the command line.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        let representation = if self.dense {
            Representation::Dense
        } else if self.packed {
            Representation::Packed
        } else {
            self.representation.unwrap_or(*base.representation())
        };

        let config = GameConfig::new(
            self.run.unwrap_or(*base.run()),
            self.width.unwrap_or(*base.width()),
            self.height.unwrap_or(*base.height()),
            representation,
        );
        debug!(?config, "Resolved game config");
        Ok(config)
    }
}
