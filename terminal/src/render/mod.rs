pub mod arena;
pub mod effects;
pub mod standard_renderer;
pub mod traits;
pub mod types;

/// Player colors are plain RGB in the engine.
pub fn tui_color(color: common::Color) -> ratatui::style::Color {
    ratatui::style::Color::Rgb(color.r, color.g, color.b)
}
