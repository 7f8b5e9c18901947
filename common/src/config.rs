use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::*;
use crate::error::ConfigError;

const MIN_GRID_SIZE: u16 = 4;
/// Keeps coordinates well inside `i16` and the terminal grid allocation small.
pub const MAX_GRID_SIZE: u16 = 512;

/// Tunables for a session. Everything that differed between the two
/// historical variants of the game (tick rate, start offset, explosions)
/// lives here rather than in separate code paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: u16,
    pub tick_interval_ms: u64,
    pub restart_delay_ms: u64,
    pub edge_offset: u16,
    pub countdown_from: u8,
    pub countdown_step_ms: u64,
    pub go_hold_ms: u64,
    pub explosion_enabled: bool,
    pub explosion_frames: u8,
    pub sound_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            restart_delay_ms: DEFAULT_RESTART_DELAY_MS,
            edge_offset: DEFAULT_EDGE_OFFSET,
            countdown_from: DEFAULT_COUNTDOWN_FROM,
            countdown_step_ms: DEFAULT_COUNTDOWN_STEP_MS,
            go_hold_ms: DEFAULT_GO_HOLD_MS,
            explosion_enabled: true,
            explosion_frames: DEFAULT_EXPLOSION_FRAMES,
            sound_enabled: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.countdown_step_ms == 0 {
            return Err(ConfigError::ZeroCountdownStep);
        }
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall { size: self.grid_size, min: MIN_GRID_SIZE });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge { size: self.grid_size, max: MAX_GRID_SIZE });
        }
        // Start cells sit at `o` and `N - o`; both must be on the grid and distinct.
        if self.edge_offset == 0 || u32::from(self.edge_offset) * 2 >= u32::from(self.grid_size) {
            return Err(ConfigError::EdgeOffsetOutOfRange {
                offset: self.edge_offset,
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }

    pub fn countdown_step(&self) -> Duration {
        Duration::from_millis(self.countdown_step_ms)
    }

    pub fn go_hold(&self) -> Duration {
        Duration::from_millis(self.go_hold_ms)
    }
}
