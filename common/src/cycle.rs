use serde::{Deserialize, Serialize};

use crate::seat::{ControlScheme, Seat};
use crate::setup::{Color, PlayerSetup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Position { x, y }
    }

    pub fn step(self, heading: Heading) -> Position {
        let (dx, dy) = heading.delta();
        Position { x: self.x + dx, y: self.y + dy }
    }
}

/// Direction of travel. `Stationary` is the heading every cycle starts a
/// round with, until its player steers for the first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    Stationary,
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn delta(self) -> (i16, i16) {
        match self {
            Heading::Stationary => (0, 0),
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub fn reverse(self) -> Heading {
        match self {
            Heading::Stationary => Heading::Stationary,
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    pub fn is_moving(self) -> bool {
        self != Heading::Stationary
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub seat: Seat,
    pub name: String,
    pub color: Color,
    pub glyph: char,
    pub position: Position,
    pub heading: Heading,
    pub is_alive: bool,
    pub controls: ControlScheme,
}

impl Player {
    /// Seat a player at their fixed start cell, stationary and alive.
    pub fn seated(seat: Seat, setup: &PlayerSetup, grid_size: u16, edge_offset: u16) -> Self {
        Player {
            seat,
            name: setup.name.trim().to_string(),
            color: setup.color,
            glyph: setup.glyph.as_char(),
            position: seat.start_position(grid_size, edge_offset),
            heading: Heading::Stationary,
            is_alive: true,
            controls: seat.control_scheme(),
        }
    }

    pub fn is_moving(&self) -> bool {
        self.is_alive && self.heading.is_moving()
    }
}
