use common::Color;
use super::types::{CharPattern, CharDimensions};

pub trait GameObjectRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    fn render_trail(&self) -> CharPattern;

    fn render_player(&self, glyph: char, color: Color) -> CharPattern;

    fn render_explosion(&self, frame: u8, color: Color) -> CharPattern;
}
