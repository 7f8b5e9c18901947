use super::View;
use crate::app::AppCommand;
use crate::render::tui_color;
use common::{validate_roster, Color, Glyph, PlayerSetup, PseudoRandom, Seat, MAX_PLAYERS};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color as TuiColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NAME_MAX_LEN: usize = 16;
const DEFAULT_PLAYER_COUNT: usize = 2;

pub const PALETTE: [Color; 8] = [
    Color::rgb(0xe6, 0x39, 0x46),
    Color::rgb(0x2a, 0x9d, 0x8f),
    Color::rgb(0xe9, 0xc4, 0x6a),
    Color::rgb(0x45, 0x7b, 0x9d),
    Color::rgb(0xf4, 0xa2, 0x61),
    Color::rgb(0x9b, 0x5d, 0xe5),
    Color::rgb(0x06, 0xd6, 0xa0),
    Color::rgb(0xf1, 0x5b, 0xb5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Count,
    Name(usize),
    Color(usize),
    Glyph(usize),
    Start,
}

#[derive(Debug, Clone)]
struct SeatForm {
    name: String,
    color: Color,
    palette_index: Option<usize>,
    glyph: Glyph,
}

/// The player setup form: how many players, and a name, color and glyph
/// for each seat.
pub struct SetupState {
    count: usize,
    seats: Vec<SeatForm>,
    focus: Field,
    rng: PseudoRandom,
    error: Option<String>,
}

impl SetupState {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = PseudoRandom::new(seed);
        let seats = (0..MAX_PLAYERS)
            .map(|i| SeatForm {
                name: String::new(),
                color: Color::random(&mut rng),
                palette_index: None,
                glyph: Glyph::new(i).unwrap_or_default(),
            })
            .collect();
        Self {
            count: DEFAULT_PLAYER_COUNT,
            seats,
            focus: Field::Name(0),
            rng,
            error: None,
        }
    }

    /// Prefill the form from the roster of the previous match.
    pub fn from_roster(roster: &[PlayerSetup]) -> Self {
        let mut state = Self::new();
        if !roster.is_empty() {
            state.count = roster.len().min(MAX_PLAYERS);
        }
        for (form, setup) in state.seats.iter_mut().zip(roster) {
            form.name = setup.name.clone();
            form.color = setup.color;
            form.glyph = setup.glyph;
        }
        state
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn roster(&self) -> Vec<PlayerSetup> {
        self.seats
            .iter()
            .take(self.count)
            .map(|form| PlayerSetup::new(form.name.trim(), form.color, form.glyph))
            .collect()
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Count];
        for i in 0..self.count {
            fields.extend([Field::Name(i), Field::Color(i), Field::Glyph(i)]);
        }
        fields.push(Field::Start);
        fields
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    fn set_count(&mut self, count: usize) {
        self.count = count.clamp(1, MAX_PLAYERS);
        if !self.fields().contains(&self.focus) {
            self.focus = Field::Count;
        }
    }

    fn cycle(&mut self, forward: bool) {
        match self.focus {
            Field::Count => {
                let count = if forward { self.count + 1 } else { self.count.saturating_sub(1) };
                self.set_count(count);
            }
            Field::Color(i) => {
                let form = &mut self.seats[i];
                let next = match (form.palette_index, forward) {
                    (None, true) => 0,
                    (None, false) => PALETTE.len() - 1,
                    (Some(p), true) => (p + 1) % PALETTE.len(),
                    (Some(p), false) => (p + PALETTE.len() - 1) % PALETTE.len(),
                };
                form.palette_index = Some(next);
                form.color = PALETTE[next];
            }
            Field::Glyph(i) => {
                let form = &mut self.seats[i];
                form.glyph = if forward { form.glyph.next() } else { form.glyph.prev() };
            }
            Field::Name(_) | Field::Start => {}
        }
    }

    fn type_char(&mut self, c: char) {
        match self.focus {
            Field::Name(i) => {
                let name = &mut self.seats[i].name;
                if !c.is_control() && name.chars().count() < NAME_MAX_LEN {
                    name.push(c);
                }
            }
            Field::Color(i) if c == 'r' => {
                let color = Color::random(&mut self.rng);
                let form = &mut self.seats[i];
                form.color = color;
                form.palette_index = None;
            }
            _ => {}
        }
    }

    fn submit(&mut self) -> Option<AppCommand> {
        let roster = self.roster();
        match validate_roster(&roster) {
            Ok(()) => {
                self.error = None;
                Some(AppCommand::StartMatch(roster))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    fn field_style(&self, field: Field) -> Style {
        if self.focus == field {
            Style::default().fg(TuiColor::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }

    fn marker(&self, field: Field) -> Span<'static> {
        if self.focus == field {
            Span::styled("> ", Style::default().fg(TuiColor::Yellow))
        } else {
            Span::raw("  ")
        }
    }

    fn form_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            self.marker(Field::Count),
            Span::raw("Players: "),
            Span::styled(format!("◀ {} ▶", self.count), self.field_style(Field::Count)),
        ])];
        lines.push(Line::from(""));

        for (i, form) in self.seats.iter().take(self.count).enumerate() {
            let scheme = Seat::from_index(i).map(|s| s.control_scheme().label()).unwrap_or_default();
            lines.push(Line::from(Span::styled(
                format!("Player {} ({})", i + 1, scheme),
                Style::default().fg(TuiColor::Cyan).add_modifier(Modifier::BOLD),
            )));

            let cursor = if self.focus == Field::Name(i) { "_" } else { "" };
            lines.push(Line::from(vec![
                self.marker(Field::Name(i)),
                Span::raw("Name:  "),
                Span::styled(format!("{}{}", form.name, cursor), self.field_style(Field::Name(i))),
            ]));
            lines.push(Line::from(vec![
                self.marker(Field::Color(i)),
                Span::raw("Color: "),
                Span::styled("    ", Style::default().bg(tui_color(form.color))),
                Span::styled(format!(" {}", form.color), self.field_style(Field::Color(i))),
            ]));
            lines.push(Line::from(vec![
                self.marker(Field::Glyph(i)),
                Span::raw("Glyph: "),
                Span::styled(format!("◀ {} ▶", form.glyph.as_char()), self.field_style(Field::Glyph(i))),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            self.marker(Field::Start),
            Span::styled("[ Start ]", self.field_style(Field::Start)),
        ]));
        lines
    }
}

impl Default for SetupState {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SetupState {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Esc => Some(AppCommand::Quit),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                None
            }
            KeyCode::Left => {
                self.cycle(false);
                None
            }
            KeyCode::Right => {
                self.cycle(true);
                None
            }
            KeyCode::Backspace => {
                if let Field::Name(i) = self.focus {
                    self.seats[i].name.pop();
                }
                None
            }
            KeyCode::Char(c) => {
                self.type_char(c);
                None
            }
            _ => None,
        }
    }

    fn update(&mut self, _dt: Duration) {
        // Nothing animates on the form
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("LIGHT CYCLES")
            .style(Style::default().fg(TuiColor::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let form = Paragraph::new(self.form_lines())
            .block(Block::default().title("Player Setup").borders(Borders::ALL));
        frame.render_widget(form, chunks[1]);

        let footer = match &self.error {
            Some(error) => Paragraph::new(error.clone()).style(Style::default().fg(TuiColor::Red)),
            None => Paragraph::new("Tab/↑↓: Move | ←/→: Change | r: Random color | Enter: Start | Esc: Quit")
                .style(Style::default().fg(TuiColor::DarkGray)),
        };
        frame.render_widget(
            footer.alignment(Alignment::Center).block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );
    }
}
