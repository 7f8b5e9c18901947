use serde::{Deserialize, Serialize};

use crate::cycle::{Heading, Position};

/// A key as the engine sees it, independent of any terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlScheme {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
}

impl ControlScheme {
    const fn letters(up: char, left: char, down: char, right: char) -> Self {
        ControlScheme {
            up: Key::Char(up),
            down: Key::Char(down),
            left: Key::Char(left),
            right: Key::Char(right),
        }
    }

    pub fn heading_for(&self, key: Key) -> Option<Heading> {
        if key == self.up {
            Some(Heading::Up)
        } else if key == self.down {
            Some(Heading::Down)
        } else if key == self.left {
            Some(Heading::Left)
        } else if key == self.right {
            Some(Heading::Right)
        } else {
            None
        }
    }

    pub fn keys(&self) -> [Key; 4] {
        [self.up, self.left, self.down, self.right]
    }

    /// Short human label, e.g. "WASD" or "Arrows".
    pub fn label(&self) -> String {
        if self.up == Key::ArrowUp {
            return "Arrows".to_string();
        }
        self.keys()
            .iter()
            .filter_map(|key| match key {
                Key::Char(c) => Some(c.to_ascii_uppercase()),
                _ => None,
            })
            .collect()
    }
}

/// One of the four fixed player slots. The seat decides the control scheme
/// and the start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
    Third,
    Fourth,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::First, Seat::Second, Seat::Third, Seat::Fourth];

    pub fn from_index(index: usize) -> Option<Seat> {
        Seat::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn control_scheme(self) -> ControlScheme {
        match self {
            Seat::First => ControlScheme {
                up: Key::ArrowUp,
                down: Key::ArrowDown,
                left: Key::ArrowLeft,
                right: Key::ArrowRight,
            },
            Seat::Second => ControlScheme::letters('w', 'a', 's', 'd'),
            Seat::Third => ControlScheme::letters('i', 'j', 'k', 'l'),
            Seat::Fourth => ControlScheme::letters('t', 'f', 'g', 'h'),
        }
    }

    /// Alternating corners, pulled in from the walls by `edge_offset`.
    pub fn start_position(self, grid_size: u16, edge_offset: u16) -> Position {
        let near = edge_offset as i16;
        let far = grid_size as i16 - edge_offset as i16;
        match self {
            Seat::First => Position::new(near, near),
            Seat::Second => Position::new(far, far),
            Seat::Third => Position::new(near, far),
            Seat::Fourth => Position::new(far, near),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn control_schemes_do_not_share_keys() {
        let mut seen = HashSet::new();
        for seat in Seat::ALL {
            for key in seat.control_scheme().keys() {
                assert!(seen.insert(key), "{:?} bound twice", key);
            }
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn start_positions_are_distinct_and_in_bounds() {
        for (grid_size, offset) in [(40, 5), (40, 4), (40, 19), (4, 1)] {
            let cells: HashSet<_> =
                Seat::ALL.iter().map(|s| s.start_position(grid_size, offset)).collect();
            assert_eq!(cells.len(), 4);
            for cell in cells {
                assert!(cell.x >= 0 && cell.x < grid_size as i16);
                assert!(cell.y >= 0 && cell.y < grid_size as i16);
            }
        }
    }

    #[test]
    fn default_start_cells() {
        assert_eq!(Seat::First.start_position(40, 5), Position::new(5, 5));
        assert_eq!(Seat::Second.start_position(40, 5), Position::new(35, 35));
        assert_eq!(Seat::Third.start_position(40, 5), Position::new(5, 35));
        assert_eq!(Seat::Fourth.start_position(40, 5), Position::new(35, 5));
    }

    #[test]
    fn wasd_maps_to_headings() {
        let scheme = Seat::Second.control_scheme();
        assert_eq!(scheme.heading_for(Key::Char('w')), Some(Heading::Up));
        assert_eq!(scheme.heading_for(Key::Char('a')), Some(Heading::Left));
        assert_eq!(scheme.heading_for(Key::Char('s')), Some(Heading::Down));
        assert_eq!(scheme.heading_for(Key::Char('d')), Some(Heading::Right));
        assert_eq!(scheme.heading_for(Key::ArrowUp), None);
        assert_eq!(scheme.label(), "WASD");
        assert_eq!(Seat::Fourth.control_scheme().label(), "TFGH");
    }

    #[test]
    fn seats_beyond_four_do_not_exist() {
        assert_eq!(Seat::from_index(3), Some(Seat::Fourth));
        assert_eq!(Seat::from_index(4), None);
    }
}
