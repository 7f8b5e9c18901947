use anyhow::Result;
use common::{Color, GameCommand, GameEvent, GameState, Glyph, Heading, PlayerSetup, Seat};
use terminal::render::{
    arena::ArenaRenderer,
    effects::Explosion,
    standard_renderer::StandardRenderer,
    types::{CharDimensions, RenderConfig, WIDE_FILLER},
};

fn main() -> Result<()> {
    let roster = vec![
        PlayerSetup::new("ann", Color::rgb(0xe6, 0x39, 0x46), Glyph::new(0)?),
        PlayerSetup::new("bea", Color::rgb(0x2a, 0x9d, 0x8f), Glyph::new(1)?),
        PlayerSetup::new("cy", Color::rgb(0xe9, 0xc4, 0x6a), Glyph::new(2)?),
    ];

    let mut state = GameState::new(12);
    state.seat_roster(&roster, 2);
    state.exec_command(GameCommand::Steer { seat: Seat::First, heading: Heading::Right })?;
    state.exec_command(GameCommand::Steer { seat: Seat::Second, heading: Heading::Up })?;
    state.exec_command(GameCommand::Steer { seat: Seat::Third, heading: Heading::Left })?;
    for _ in 0..2 {
        state.exec_command(GameCommand::Tick)?;
    }

    // cy is now at the wall
    let mut explosions = Vec::new();
    for _ in 0..2 {
        for event in state.exec_command(GameCommand::Tick)? {
            if let GameEvent::PlayerEliminated { position, color, .. } = event {
                explosions.push(Explosion::new(position, color, 6));
            }
        }
    }

    println!("=== 1x1 Rendering ===");
    render_with_dimensions(&state, &explosions, CharDimensions::new(1, 1));

    println!("\n=== 2x1 Rendering (Wide) ===");
    render_with_dimensions(&state, &explosions, CharDimensions::new(2, 1));
    Ok(())
}

fn render_with_dimensions(state: &GameState, explosions: &[Explosion], char_dims: CharDimensions) {
    let arena_renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
    let config = RenderConfig { chars_per_point: char_dims };

    let char_grid = arena_renderer.render(state, explosions, &config);
    let width = char_grid.physical_width();

    println!("┌{}┐", "─".repeat(width));
    for line in char_grid.into_lines() {
        let row: String = line.into_iter().filter(|c| *c != WIDE_FILLER).collect();
        println!("│{}│", row);
    }
    println!("└{}┘", "─".repeat(width));
}
