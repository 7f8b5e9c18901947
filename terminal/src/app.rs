use anyhow::Result;
use common::{GameConfig, PlayerSetup};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::time::Duration;

use crate::cues::Cue;
use crate::views::{MatchViewState, SetupState, View};

#[derive(Debug)]
pub enum AppCommand {
    Quit,
    BackToSetup,
    StartMatch(Vec<PlayerSetup>),
}

pub enum AppState {
    Setup(Box<SetupState>),
    Match(Box<MatchViewState>),
}

pub struct App {
    pub state: AppState,
    pub config: GameConfig,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: AppState::Setup(Box::new(SetupState::new())),
            config,
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match &mut self.state {
            AppState::Setup(setup) => setup.handle_input(key),
            AppState::Match(view) => view.handle_input(key),
        }
    }

    pub fn update(&mut self, dt: Duration) {
        match &mut self.state {
            AppState::Setup(setup) => setup.update(dt),
            AppState::Match(view) => view.update(dt),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        match &self.state {
            AppState::Setup(setup) => setup.render(frame),
            AppState::Match(view) => view.render(frame),
        }
    }

    /// Cues raised since the last call; empty outside a match.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        match &mut self.state {
            AppState::Match(view) => view.take_cues(),
            AppState::Setup(_) => Vec::new(),
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            AppCommand::StartMatch(roster) => {
                let view = MatchViewState::new(self.config.clone(), roster)?;
                self.state = AppState::Match(Box::new(view));
            }
            AppCommand::BackToSetup => {
                // Leaving a match ends the session: the roster carries over, scores do not.
                let setup = match &self.state {
                    AppState::Match(view) => SetupState::from_roster(view.session().roster()),
                    AppState::Setup(_) => SetupState::new(),
                };
                self.state = AppState::Setup(Box::new(setup));
            }
            AppCommand::Quit => {
                // Handled in main loop
            }
        }
        Ok(())
    }
}
