use common::{Color, Position};
use std::time::Duration;

/// How long each explosion frame stays on screen.
pub const EXPLOSION_FRAME_TIME: Duration = Duration::from_millis(80);

/// Short burst drawn where a player was eliminated. Cosmetic only.
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub position: Position,
    pub color: Color,
    frame: u8,
    frames: u8,
    elapsed: Duration,
}

impl Explosion {
    pub fn new(position: Position, color: Color, frames: u8) -> Self {
        Self {
            position,
            color,
            frame: 0,
            frames,
            elapsed: Duration::ZERO,
        }
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
        while self.elapsed >= EXPLOSION_FRAME_TIME && !self.is_finished() {
            self.elapsed -= EXPLOSION_FRAME_TIME;
            self.frame += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.frames
    }
}
