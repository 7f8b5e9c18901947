use super::View;
use crate::app::AppCommand;
use crate::cues::Cue;
use crate::input::game_key;
use crate::render::arena::ArenaRenderer;
use crate::render::effects::Explosion;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::tui_color;
use crate::render::types::{CharDimensions, RenderConfig};
use anyhow::Result;
use common::{GameConfig, GameEvent, GameEventMessage, Phase, PlayerSetup, Session};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::Duration;
use tracing::{debug, info, warn};

const SIDE_PANEL_WIDTH: u16 = 34;

pub struct MatchViewState {
    session: Session,
    explosions: Vec<Explosion>,
    cues: Vec<Cue>,
    banner: Option<String>,
}

impl MatchViewState {
    pub fn new(config: GameConfig, roster: Vec<PlayerSetup>) -> Result<Self> {
        let session = Session::new(config, roster)?;
        info!(players = session.roster().len(), "Match started");
        Ok(Self {
            session,
            explosions: Vec::new(),
            cues: Vec::new(),
            banner: None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    fn absorb(&mut self, messages: Vec<GameEventMessage>) {
        let config = self.session.config();
        let (explode, frames, sound) =
            (config.explosion_enabled, config.explosion_frames, config.sound_enabled);

        for message in messages {
            match message.event {
                GameEvent::PlayerEliminated { seat, position, color } => {
                    debug!(round = message.round, tick = message.tick, ?seat, "Player eliminated");
                    if explode {
                        self.explosions.push(Explosion::new(position, color, frames));
                    }
                    if sound {
                        self.cues.push(Cue::Elimination);
                    }
                }
                GameEvent::ScoreChanged { name, wins, .. } => {
                    self.banner = Some(format!("{} wins the round! ({} total)", name, wins));
                    if sound {
                        self.cues.push(Cue::Win);
                    }
                }
                GameEvent::RoundEnded { winner: None } => {
                    self.banner = Some("No survivors".to_string());
                }
                GameEvent::RoundStarted { round } => {
                    debug!(round, "Round started");
                    self.banner = None;
                    self.explosions.clear();
                }
                _ => {}
            }
        }
    }

    fn render_arena(&self, frame: &mut Frame, area: Rect) {
        let state = self.session.state();
        let block = Block::default().title("Arena").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Two columns per cell so emoji glyphs fit
        let char_dims = CharDimensions::new(2, 1);
        let arena_renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
        let config = RenderConfig { chars_per_point: char_dims };
        let char_grid = arena_renderer.render(state, &self.explosions, &config);

        let grid_width = char_grid.physical_width();
        let arena_width = grid_width + 2;
        let arena_height = char_grid.physical_height() + 2;
        let x_offset = inner.width.saturating_sub(arena_width as u16) / 2;
        let y_offset = inner.height.saturating_sub(arena_height as u16) / 2;

        let border_style = Style::default().fg(Color::DarkGray);
        let pad = " ".repeat(x_offset as usize);
        let mut lines: Vec<Line> = Vec::new();
        for _ in 0..y_offset {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!("{}┌{}┐", pad, "─".repeat(grid_width)),
            border_style,
        )));
        for row in char_grid.into_styled_lines() {
            let mut spans = vec![Span::raw(pad.clone()), Span::styled("│", border_style)];
            for cell in row {
                spans.push(Span::styled(cell.ch.to_string(), cell.style));
            }
            spans.push(Span::styled("│", border_style));
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            format!("{}└{}┘", pad, "─".repeat(grid_width)),
            border_style,
        )));

        frame.render_widget(Paragraph::new(lines), inner);

        if let Some(label) = self.session.countdown_label() {
            self.render_overlay(frame, inner, &label, Color::Yellow);
        } else if let Some(banner) = &self.banner {
            self.render_overlay(frame, inner, banner, Color::Cyan);
        }
    }

    fn render_overlay(&self, frame: &mut Frame, area: Rect, text: &str, color: Color) {
        let width = text.chars().count() as u16 + 6;
        let overlay = centered_rect(area, width, 3);
        frame.render_widget(Clear, overlay);
        frame.render_widget(
            Paragraph::new(text.to_string())
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            overlay,
        );
    }

    fn render_scoreboard(&self) -> Paragraph {
        let state = self.session.state();
        let lines: Vec<Line> = self
            .session
            .scores()
            .entries()
            .iter()
            .map(|entry| {
                let style = state
                    .players
                    .iter()
                    .find(|p| p.name == entry.name)
                    .map(|p| Style::default().fg(tui_color(p.color)))
                    .unwrap_or_default();
                Line::from(Span::styled(format!("{}: {}", entry.name, entry.wins), style))
            })
            .collect();

        Paragraph::new(lines).block(Block::default().title("Scoreboard").borders(Borders::ALL))
    }

    fn render_status(&self) -> Paragraph {
        let state = self.session.state();
        let phase = match self.session.phase() {
            Phase::Countdown(_) => "Get ready",
            Phase::Playing => "Playing",
            Phase::RoundOver { .. } => "Round over",
        };
        let lines = vec![
            Line::from(vec![
                Span::raw("Round: "),
                Span::styled(self.session.round().to_string(), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(format!("Alive: {} / {}", state.alive_count(), state.players.len())),
            Line::from(format!("Status: {}", phase)),
        ];
        Paragraph::new(lines).block(Block::default().title("Status").borders(Borders::ALL))
    }

    fn render_controls(&self) -> Paragraph {
        let mut lines: Vec<Line> = self
            .session
            .state()
            .players
            .iter()
            .map(|p| {
                Line::from(vec![
                    Span::raw(format!("{} ", p.glyph)),
                    Span::styled(p.name.clone(), Style::default().fg(tui_color(p.color))),
                    Span::styled(format!("  {}", p.controls.label()), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();
        lines.push(Line::from(Span::styled(
            "Esc: leave match | Ctrl+C: quit",
            Style::default().fg(Color::DarkGray),
        )));
        Paragraph::new(lines).block(Block::default().title("Controls").borders(Borders::ALL))
    }
}

impl View for MatchViewState {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        if key.code == KeyCode::Esc {
            return Some(AppCommand::BackToSetup);
        }
        if let Some(key) = game_key(&key) {
            match self.session.handle_key(key) {
                Ok(messages) => self.absorb(messages),
                Err(e) => warn!(error = %e, "Failed to apply key"),
            }
        }
        None
    }

    fn update(&mut self, dt: Duration) {
        // Age existing effects first so new ones start on frame 0
        for explosion in &mut self.explosions {
            explosion.advance(dt);
        }
        self.explosions.retain(|e| !e.is_finished());

        match self.session.update(dt) {
            Ok(messages) => self.absorb(messages),
            Err(e) => warn!(error = %e, "Failed to advance session"),
        }
    }

    fn render(&self, frame: &mut Frame) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)])
            .split(frame.area());

        self.render_arena(frame, columns[0]);

        let controls_height = self.session.state().players.len() as u16 + 3;
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),
                Constraint::Length(5),
                Constraint::Length(controls_height),
            ])
            .split(columns[1]);

        frame.render_widget(self.render_scoreboard(), side[0]);
        frame.render_widget(self.render_status(), side[1]);
        frame.render_widget(self.render_controls(), side[2]);
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
