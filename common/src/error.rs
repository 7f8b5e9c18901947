use thiserror::Error;

/// Reasons a roster cannot be seated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("{count} players requested, at most {max} can be seated")]
    TooManyPlayers { count: usize, max: usize },

    #[error("player {seat} has no name")]
    BlankName { seat: usize },

    #[error("name {name:?} is used by more than one player")]
    DuplicateName { name: String },

    #[error("glyph index {index} is not in the glyph list")]
    UnknownGlyph { index: usize },

    #[error("invalid color {value:?}, expected #rrggbb")]
    InvalidColor { value: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,

    #[error("countdown step must be greater than zero")]
    ZeroCountdownStep,

    #[error("grid size {size} is too small, need at least {min}")]
    GridTooSmall { size: u16, min: u16 },

    #[error("grid size {size} is too large, at most {max} is supported")]
    GridTooLarge { size: u16, max: u16 },

    #[error("edge offset {offset} does not fit a grid of size {grid_size}")]
    EdgeOffsetOutOfRange { offset: u16, grid_size: u16 },
}
