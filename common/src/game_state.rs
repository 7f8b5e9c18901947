use anyhow::{Context, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::countdown::CountdownStep;
use crate::cycle::{Heading, Player, Position};
use crate::seat::{Key, Seat};
use crate::setup::{Color, PlayerSetup};
use crate::trail::TrailSet;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Tick,
    Steer { seat: Seat, heading: Heading },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameEventMessage {
    pub round: u32,
    pub tick: u32,
    pub event: GameEvent,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted { round: u32 },
    CountdownChanged { step: CountdownStep },
    PlayerSteered { seat: Seat, heading: Heading },
    PlayerMoved { seat: Seat, position: Position },
    PlayerEliminated { seat: Seat, position: Position, color: Color },
    RoundEnded { winner: Option<Seat> },
    ScoreChanged { seat: Seat, name: String, wins: u32 },
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Complete { winner: Option<Seat> },
}

/// State of one round: the seated players and the trail they share.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameState {
    pub tick: u32,
    pub grid_size: u16,
    pub players: Vec<Player>,
    pub trails: TrailSet,
    pub status: RoundStatus,
}

impl GameState {
    pub fn new(grid_size: u16) -> Self {
        GameState {
            tick: 0,
            grid_size,
            players: Vec::new(),
            trails: TrailSet::new(),
            status: RoundStatus::InProgress,
        }
    }

    /// A round with hand-placed players, mostly useful for tests and demos.
    pub fn with_players(grid_size: u16, players: Vec<Player>) -> Self {
        GameState { players, ..GameState::new(grid_size) }
    }

    /// Reset everything round-scoped and seat `roster` in seat order.
    /// Calling this twice in a row leaves the same state as calling it once.
    pub fn seat_roster(&mut self, roster: &[PlayerSetup], edge_offset: u16) {
        self.tick = 0;
        self.trails.clear();
        self.status = RoundStatus::InProgress;
        self.players = roster
            .iter()
            .zip(Seat::ALL)
            .map(|(setup, seat)| Player::seated(seat, setup, self.grid_size, edge_offset))
            .collect();
    }

    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        let size = self.grid_size as i16;
        position.x >= 0 && position.x < size && position.y >= 0 && position.y < size
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.iter().find(|p| p.seat == seat)
    }

    fn player_mut(&mut self, seat: Seat) -> Result<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.seat == seat)
            .with_context(|| format!("No player in seat {:?}", seat))
    }

    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive).count()
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, RoundStatus::Complete { .. })
    }

    /// Seats whose control scheme binds `key`, with the heading it asks for.
    pub fn steering_for(&self, key: Key) -> Vec<(Seat, Heading)> {
        self.players
            .iter()
            .filter_map(|p| p.controls.heading_for(key).map(|heading| (p.seat, heading)))
            .collect()
    }

    pub fn exec_command(&mut self, command: GameCommand) -> Result<Vec<GameEvent>> {
        let mut out: Vec<GameEvent> = Vec::new();
        match command {
            GameCommand::Tick => {
                if self.is_complete() {
                    return Ok(out);
                }

                // Players move in seat order; a cell entered by an earlier
                // seat is already trail when a later seat is checked.
                for i in 0..self.players.len() {
                    let player = &self.players[i];
                    if !player.is_moving() {
                        continue;
                    }
                    let seat = player.seat;
                    let color = player.color;
                    let next = player.position.step(player.heading);

                    let event = if !self.in_bounds(next) || self.trails.contains(&next) {
                        debug!("Player {:?} crashed at ({}, {}) on tick {}", seat, next.x, next.y, self.tick);
                        GameEvent::PlayerEliminated { seat, position: next, color }
                    } else {
                        GameEvent::PlayerMoved { seat, position: next }
                    };
                    self.apply_event(event, Some(&mut out));
                }

                self.tick += 1;
                trace!("Tick {} done, {} alive", self.tick, self.alive_count());

                if self.alive_count() <= 1 {
                    let winner = self.players.iter().find(|p| p.is_alive).map(|p| p.seat);
                    self.apply_event(GameEvent::RoundEnded { winner }, Some(&mut out));
                }
            }

            GameCommand::Steer { seat, heading } => {
                let player = self.player_mut(seat)?;
                if !player.is_alive || player.heading == heading {
                    return Ok(out);
                }
                if heading == player.heading.reverse() {
                    trace!("Ignoring reversal for {:?}", seat);
                    return Ok(out);
                }
                self.apply_event(GameEvent::PlayerSteered { seat, heading }, Some(&mut out));
            }
        }

        Ok(out)
    }

    pub fn apply_event(&mut self, event: GameEvent, out: Option<&mut Vec<GameEvent>>) {
        if let Some(out) = out {
            out.push(event.clone());
        }

        match event {
            GameEvent::PlayerSteered { seat, heading } => {
                if let Ok(player) = self.player_mut(seat) {
                    player.heading = heading;
                }
            }

            GameEvent::PlayerMoved { seat, position } => {
                if let Some(player) = self.players.iter_mut().find(|p| p.seat == seat) {
                    player.position = position;
                    self.trails.mark(position);
                }
            }

            GameEvent::PlayerEliminated { seat, position, .. } => {
                if let Ok(player) = self.player_mut(seat) {
                    player.position = position;
                    player.is_alive = false;
                }
            }

            GameEvent::RoundEnded { winner } => {
                self.status = RoundStatus::Complete { winner };
            }

            GameEvent::RoundStarted { .. }
            | GameEvent::CountdownChanged { .. }
            | GameEvent::ScoreChanged { .. } => {}
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
