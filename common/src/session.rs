use anyhow::Result;
use log::{debug, info, log_enabled, Level};
use std::time::Duration;

use crate::config::GameConfig;
use crate::constants::MAX_TICKS_PER_UPDATE;
use crate::countdown::Countdown;
use crate::game_state::{GameCommand, GameEvent, GameEventMessage, GameState};
use crate::scoreboard::Scoreboard;
use crate::seat::{Key, Seat};
use crate::setup::{validate_roster, PlayerSetup};
use crate::timer::TickTimer;

#[derive(Debug, Clone)]
pub enum Phase {
    Countdown(Countdown),
    Playing,
    RoundOver { remaining: Duration },
}

/// Round controller for one sitting of the game. Owns the roster, the
/// current round's state, the score table and the single tick timer.
///
/// Time only moves through [`Session::update`] and input only through
/// [`Session::handle_key`]; both take `&mut self`, so a key press is always
/// applied entirely before or after a tick.
pub struct Session {
    config: GameConfig,
    roster: Vec<PlayerSetup>,
    state: GameState,
    scores: Scoreboard,
    phase: Phase,
    timer: TickTimer,
    round: u32,
    /// Events raised outside `update`, handed out by the next `update`.
    pending: Vec<GameEventMessage>,
}

impl Session {
    /// Validate the config and roster, then set up the first round. The
    /// first round's opening events come out of the first `update`.
    pub fn new(config: GameConfig, roster: Vec<PlayerSetup>) -> Result<Self> {
        config.validate()?;
        validate_roster(&roster)?;

        let countdown = Self::countdown_for(&config);
        let mut session = Session {
            state: GameState::new(config.grid_size),
            timer: TickTimer::new(config.tick_interval()),
            phase: Phase::Countdown(countdown),
            scores: Scoreboard::new(),
            roster,
            config,
            round: 0,
            pending: Vec::new(),
        };
        session.pending = session.start_round();
        Ok(session)
    }

    fn countdown_for(config: &GameConfig) -> Countdown {
        Countdown::new(config.countdown_from, config.countdown_step(), config.go_hold())
    }

    /// Reseat the roster, clear trails and begin the countdown. The tick
    /// timer is stopped first so a restart never leaves two schedules.
    pub fn start_round(&mut self) -> Vec<GameEventMessage> {
        self.timer.stop();
        self.pending.clear();
        self.round += 1;
        self.state.seat_roster(&self.roster, self.config.edge_offset);
        for player in &self.state.players {
            self.scores.register(&player.name);
        }

        let countdown = Self::countdown_for(&self.config);
        let step = countdown.current();
        self.phase = Phase::Countdown(countdown);
        info!("Round {} starting with {} players", self.round, self.state.players.len());

        vec![
            self.message(GameEvent::RoundStarted { round: self.round }),
            self.message(GameEvent::CountdownChanged { step }),
        ]
    }

    /// Apply a key press to every player whose controls bind it. Keys are
    /// ignored outside the playing phase.
    pub fn handle_key(&mut self, key: Key) -> Result<Vec<GameEventMessage>> {
        let mut out = Vec::new();
        if !self.is_playing() {
            return Ok(out);
        }

        for (seat, heading) in self.state.steering_for(key) {
            for event in self.state.exec_command(GameCommand::Steer { seat, heading })? {
                out.push(self.message(event));
            }
        }
        Ok(out)
    }

    /// Advance wall-clock time by `dt`.
    pub fn update(&mut self, dt: Duration) -> Result<Vec<GameEventMessage>> {
        let mut out = std::mem::take(&mut self.pending);
        match self.phase {
            Phase::Countdown(_) => self.advance_countdown(dt, &mut out),
            Phase::Playing => self.advance_playing(dt, &mut out)?,
            Phase::RoundOver { .. } => self.advance_round_over(dt, &mut out),
        }
        Ok(out)
    }

    fn advance_countdown(&mut self, dt: Duration, out: &mut Vec<GameEventMessage>) {
        let (steps, done) = match &mut self.phase {
            Phase::Countdown(countdown) => {
                let steps = countdown.advance(dt);
                (steps, countdown.is_done())
            }
            _ => return,
        };

        for step in steps {
            out.push(self.message(GameEvent::CountdownChanged { step }));
        }
        if done {
            debug!("Round {} countdown finished, ticking every {:?}", self.round, self.timer.interval());
            self.phase = Phase::Playing;
            self.timer.start();
        }
    }

    fn advance_playing(&mut self, dt: Duration, out: &mut Vec<GameEventMessage>) -> Result<()> {
        // at most MAX_TICKS_PER_UPDATE per call, the rest of the backlog is dropped
        let due = self.timer.advance(dt).min(MAX_TICKS_PER_UPDATE);
        for _ in 0..due {
            out.extend(self.tick()?);
            // ticks still owed to a finished round are dropped
            if !self.is_playing() {
                break;
            }
        }
        Ok(())
    }

    fn advance_round_over(&mut self, dt: Duration, out: &mut Vec<GameEventMessage>) {
        let expired = match &mut self.phase {
            Phase::RoundOver { remaining } => {
                if dt >= *remaining {
                    true
                } else {
                    *remaining -= dt;
                    false
                }
            }
            _ => false,
        };
        if expired {
            out.extend(self.start_round());
        }
    }

    /// Run one simulation step and settle the round if it ended.
    fn tick(&mut self) -> Result<Vec<GameEventMessage>> {
        let mut out = Vec::new();
        for event in self.state.exec_command(GameCommand::Tick)? {
            let ended = match &event {
                GameEvent::RoundEnded { winner } => Some(*winner),
                _ => None,
            };
            out.push(self.message(event));
            if let Some(winner) = ended {
                out.extend(self.finish_round(winner));
            }
        }
        Ok(out)
    }

    fn finish_round(&mut self, winner: Option<Seat>) -> Vec<GameEventMessage> {
        self.timer.stop();
        let mut out = Vec::new();

        let survivor = winner.and_then(|seat| self.state.player(seat)).map(|p| (p.seat, p.name.clone()));
        match survivor {
            Some((seat, name)) => {
                let wins = self.scores.award(&name);
                info!("Round {} won by {} ({} wins)", self.round, name, wins);
                out.push(self.message(GameEvent::ScoreChanged { seat, name, wins }));
            }
            None => info!("Round {} ended with no survivor", self.round),
        }

        if log_enabled!(Level::Debug) {
            if let Ok(json) = self.state.to_json() {
                debug!("Round {} final state: {}", self.round, json);
            }
        }

        self.phase = Phase::RoundOver { remaining: self.config.restart_delay() };
        out
    }

    fn message(&self, event: GameEvent) -> GameEventMessage {
        GameEventMessage { round: self.round, tick: self.state.current_tick(), event }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing)
    }

    pub fn is_ticking(&self) -> bool {
        self.timer.is_running()
    }

    pub fn countdown_label(&self) -> Option<String> {
        match &self.phase {
            Phase::Countdown(countdown) => countdown.label(),
            _ => None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn roster(&self) -> &[PlayerSetup] {
        &self.roster
    }

    pub fn round(&self) -> u32 {
        self.round
    }
}
