use common::Color;
use ratatui::style::{Color as TuiColor, Modifier, Style};

use super::traits::GameObjectRenderer;
use super::tui_color;
use super::types::{CharDimensions, CharPattern, WIDE_FILLER};

const EXPLOSION_CHARS: [char; 4] = ['✹', '✸', '✶', '·'];

pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }
}

impl GameObjectRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_trail(&self) -> CharPattern {
        CharPattern::single('█', self.char_dims, Style::default().fg(TuiColor::DarkGray))
    }

    fn render_player(&self, glyph: char, color: Color) -> CharPattern {
        let style = Style::default().bg(tui_color(color));
        if self.char_dims.horizontal >= 2 {
            // Emoji take two columns; the filler keeps the row aligned.
            let mut top = vec![glyph, WIDE_FILLER];
            top.extend(std::iter::repeat(' ').take(self.char_dims.horizontal - 2));
            let mut chars = vec![top];
            for _ in 1..self.char_dims.vertical {
                chars.push(vec![' '; self.char_dims.horizontal]);
            }
            CharPattern::new(chars, style)
        } else {
            // No room for a wide glyph in a single column
            CharPattern::single('●', self.char_dims, Style::default().fg(tui_color(color)))
        }
    }

    fn render_explosion(&self, frame: u8, color: Color) -> CharPattern {
        let ch = EXPLOSION_CHARS[frame as usize % EXPLOSION_CHARS.len()];
        let style = Style::default().fg(tui_color(color)).add_modifier(Modifier::BOLD);
        CharPattern::single(ch, self.char_dims, style)
    }
}
