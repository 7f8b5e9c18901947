/// Side length of the square arena, in cells
pub const DEFAULT_GRID_SIZE: u16 = 40;

/// Default tick interval in milliseconds (two cells per second)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;

/// Pause between the end of a round and the next countdown
pub const DEFAULT_RESTART_DELAY_MS: u64 = 2000;

/// How far the start positions sit inward from the walls
pub const DEFAULT_EDGE_OFFSET: u16 = 5;

pub const DEFAULT_COUNTDOWN_FROM: u8 = 3;
pub const DEFAULT_COUNTDOWN_STEP_MS: u64 = 1000;

/// How long "GO!" stays up before the first tick
pub const DEFAULT_GO_HOLD_MS: u64 = 800;

pub const DEFAULT_EXPLOSION_FRAMES: u8 = 6;

pub const MAX_PLAYERS: usize = 4;

/// Ticks one `Session::update` may run after a stalled frame.
pub const MAX_TICKS_PER_UPDATE: u32 = 2;

/// Glyphs a player can pick as their token
pub const GLYPHS: [char; 7] = ['🦝', '🐸', '🐱', '🐶', '🐵', '🐧', '🐯'];
