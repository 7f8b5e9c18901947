use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::{GLYPHS, MAX_PLAYERS};
use crate::error::SetupError;
use crate::util::PseudoRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn random(rng: &mut PseudoRandom) -> Self {
        let value = rng.next_u32() & 0x00ff_ffff;
        Color::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SetupError::InvalidColor { value: s.to_string() };
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Index into the fixed glyph list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Glyph(usize);

impl Glyph {
    pub fn new(index: usize) -> Result<Self, SetupError> {
        if index < GLYPHS.len() {
            Ok(Glyph(index))
        } else {
            Err(SetupError::UnknownGlyph { index })
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn as_char(self) -> char {
        GLYPHS[self.0 % GLYPHS.len()]
    }

    pub fn next(self) -> Glyph {
        Glyph((self.0 + 1) % GLYPHS.len())
    }

    pub fn prev(self) -> Glyph {
        Glyph((self.0 + GLYPHS.len() - 1) % GLYPHS.len())
    }
}

/// What the setup screen collects for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub color: Color,
    pub glyph: Glyph,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, color: Color, glyph: Glyph) -> Self {
        PlayerSetup { name: name.into(), color, glyph }
    }
}

/// Check a roster before it is seated. Names are compared after trimming.
pub fn validate_roster(roster: &[PlayerSetup]) -> Result<(), SetupError> {
    if roster.is_empty() {
        return Err(SetupError::NoPlayers);
    }
    if roster.len() > MAX_PLAYERS {
        return Err(SetupError::TooManyPlayers { count: roster.len(), max: MAX_PLAYERS });
    }

    let mut names = HashSet::new();
    for (i, setup) in roster.iter().enumerate() {
        let name = setup.name.trim();
        if name.is_empty() {
            return Err(SetupError::BlankName { seat: i + 1 });
        }
        if !names.insert(name) {
            return Err(SetupError::DuplicateName { name: name.to_string() });
        }
        Glyph::new(setup.glyph.index())?;
    }
    Ok(())
}
