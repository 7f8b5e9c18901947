use common::{Color, GameState, Glyph, Heading, Player, PlayerSetup, Position, Seat};
use terminal::render::{
    arena::ArenaRenderer,
    effects::Explosion,
    standard_renderer::StandardRenderer,
    types::{CharDimensions, RenderConfig, WIDE_FILLER},
};

fn player(seat: Seat, x: i16, y: i16, heading: Heading) -> Player {
    let setup = PlayerSetup::new(format!("{:?}", seat), Color::rgb(10, 20, 30), Glyph::default());
    let mut player = Player::seated(seat, &setup, 10, 2);
    player.position = Position::new(x, y);
    player.heading = heading;
    player
}

fn state_with_trail() -> GameState {
    // a second, parked player keeps the round going
    let mut state = GameState::with_players(
        10,
        vec![
            player(Seat::First, 3, 5, Heading::Right),
            player(Seat::Second, 0, 9, Heading::Stationary),
        ],
    );
    state.exec_command(common::GameCommand::Tick).unwrap();
    state.exec_command(common::GameCommand::Tick).unwrap();
    state
}

#[test]
fn test_2x1_rendering() {
    let state = state_with_trail();

    let char_dims = CharDimensions::new(2, 1);
    let arena_renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
    let config = RenderConfig { chars_per_point: char_dims };

    let lines = arena_renderer.render(&state, &[], &config).into_lines();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0].len(), 20);

    // trail cell (4,5) -> chars 8,9 on row 5
    assert_eq!(lines[5][8], '█');
    assert_eq!(lines[5][9], '█');

    // player at (5,5) draws its glyph plus a filler column
    assert_eq!(lines[5][10], '🦝');
    assert_eq!(lines[5][11], WIDE_FILLER);

    // start cell (3,5) was never marked
    assert_eq!(lines[5][6], ' ');
}

#[test]
fn test_styled_lines_drop_fillers() {
    let state = state_with_trail();
    let char_dims = CharDimensions::new(2, 1);
    let arena_renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
    let config = RenderConfig { chars_per_point: char_dims };

    let lines = arena_renderer.render(&state, &[], &config).into_styled_lines();
    assert_eq!(lines[5].len(), 19);
    assert_eq!(lines[0].len(), 20);
}

#[test]
fn test_1x1_rendering() {
    let state = state_with_trail();

    let char_dims = CharDimensions::new(1, 1);
    let arena_renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
    let config = RenderConfig { chars_per_point: char_dims };

    let lines = arena_renderer.render(&state, &[], &config).into_lines();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0].len(), 10);
    assert_eq!(lines[5][4], '█');
    assert_eq!(lines[5][5], '●');
}

#[test]
fn test_dead_players_are_not_drawn() {
    let mut state = GameState::with_players(10, vec![player(Seat::First, 9, 2, Heading::Right)]);
    state.exec_command(common::GameCommand::Tick).unwrap();
    assert!(!state.players[0].is_alive);

    let char_dims = CharDimensions::new(1, 1);
    let arena_renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
    let config = RenderConfig { chars_per_point: char_dims };
    let lines = arena_renderer.render(&state, &[], &config).into_lines();

    assert!(lines.iter().flatten().all(|c| *c == ' '));
}

#[test]
fn test_wall_explosion_is_clamped_onto_the_grid() {
    let state = GameState::new(10);
    let explosions = vec![Explosion::new(Position::new(10, 2), Color::rgb(255, 0, 0), 4)];

    let char_dims = CharDimensions::new(1, 1);
    let arena_renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
    let config = RenderConfig { chars_per_point: char_dims };
    let lines = arena_renderer.render(&state, &explosions, &config).into_lines();

    assert_eq!(lines[2][9], '✹');
}
