use anyhow::{Context, Result};
use clap::Parser;
use common::GameConfig;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "lightcycles",
    about = "Local multiplayer light-cycle arena for the terminal"
)]
pub struct Args {
    /// JSON file with game settings; flags below override it
    #[arg(long, env = "LIGHTCYCLES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Milliseconds between simulation ticks
    #[arg(long, env = "LIGHTCYCLES_TICK_MS")]
    pub tick_ms: Option<u64>,

    /// Side length of the arena in cells
    #[arg(long, env = "LIGHTCYCLES_GRID_SIZE")]
    pub grid_size: Option<u16>,

    /// Distance of the start cells from the walls
    #[arg(long, env = "LIGHTCYCLES_EDGE_OFFSET")]
    pub edge_offset: Option<u16>,

    /// Pause between rounds in milliseconds
    #[arg(long, env = "LIGHTCYCLES_RESTART_DELAY_MS")]
    pub restart_delay_ms: Option<u64>,

    /// Skip the explosion animation
    #[arg(long)]
    pub no_explosions: bool,

    /// Ring the terminal bell on eliminations and wins
    #[arg(long)]
    pub sound: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "LIGHTCYCLES_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Defaults, then the JSON file, then flags and environment.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {:?}", path))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse config file {:?}", path))?
            }
            None => GameConfig::default(),
        };

        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(edge_offset) = self.edge_offset {
            config.edge_offset = edge_offset;
        }
        if let Some(restart_delay_ms) = self.restart_delay_ms {
            config.restart_delay_ms = restart_delay_ms;
        }
        if self.no_explosions {
            config.explosion_enabled = false;
        }
        if self.sound {
            config.sound_enabled = true;
        }

        config.validate().context("Invalid game settings")?;
        Ok(config)
    }
}
