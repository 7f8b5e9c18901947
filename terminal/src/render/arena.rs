use super::effects::Explosion;
use super::traits::GameObjectRenderer;
use super::types::{CharGrid, RenderConfig};
use common::{GameState, Position};

pub struct ArenaRenderer<R: GameObjectRenderer> {
    renderer: R,
}

impl<R: GameObjectRenderer> ArenaRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, state: &GameState, explosions: &[Explosion], config: &RenderConfig) -> CharGrid {
        let size = state.grid_size as usize;
        let mut grid = CharGrid::new(size, size, config.chars_per_point);

        // Trails
        let trail = self.renderer.render_trail();
        for cell in state.trails.iter() {
            if state.in_bounds(*cell) {
                grid.set_logical_point(cell.x as usize, cell.y as usize, &trail);
            }
        }

        // Explosions; a wall crash is drawn on the wall-side cell
        for explosion in explosions.iter().filter(|e| !e.is_finished()) {
            let (x, y) = clamp_to_grid(explosion.position, size);
            let pattern = self.renderer.render_explosion(explosion.frame(), explosion.color);
            grid.set_logical_point(x, y, &pattern);
        }

        // Live players on top
        for player in state.players.iter().filter(|p| p.is_alive) {
            if state.in_bounds(player.position) {
                let pattern = self.renderer.render_player(player.glyph, player.color);
                grid.set_logical_point(player.position.x as usize, player.position.y as usize, &pattern);
            }
        }

        grid
    }
}

fn clamp_to_grid(position: Position, size: usize) -> (usize, usize) {
    let max = size.saturating_sub(1) as i16;
    (position.x.clamp(0, max) as usize, position.y.clamp(0, max) as usize)
}
