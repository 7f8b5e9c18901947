use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownStep {
    Count(u8),
    Go,
    Done,
}

impl CountdownStep {
    pub fn label(self) -> Option<String> {
        match self {
            CountdownStep::Count(n) => Some(n.to_string()),
            CountdownStep::Go => Some("GO!".to_string()),
            CountdownStep::Done => None,
        }
    }
}

/// Pre-round countdown: N, N-1, ... 1 at `step` intervals, then "GO!" for
/// `go_hold`, then done. Pure timing; it never touches game state.
#[derive(Debug, Clone)]
pub struct Countdown {
    current: CountdownStep,
    remaining: Duration,
    step: Duration,
    go_hold: Duration,
}

impl Countdown {
    pub fn new(from: u8, step: Duration, go_hold: Duration) -> Self {
        let (current, remaining) = if from == 0 {
            (CountdownStep::Go, go_hold)
        } else {
            (CountdownStep::Count(from), step)
        };
        Countdown { current, remaining, step, go_hold }
    }

    pub fn current(&self) -> CountdownStep {
        self.current
    }

    pub fn label(&self) -> Option<String> {
        self.current.label()
    }

    pub fn is_done(&self) -> bool {
        self.current == CountdownStep::Done
    }

    /// Advance by `dt` and return every step entered along the way.
    pub fn advance(&mut self, mut dt: Duration) -> Vec<CountdownStep> {
        let mut entered = Vec::new();
        while !self.is_done() && dt >= self.remaining {
            dt -= self.remaining;
            self.current = match self.current {
                CountdownStep::Count(n) if n > 1 => CountdownStep::Count(n - 1),
                CountdownStep::Count(_) => CountdownStep::Go,
                CountdownStep::Go | CountdownStep::Done => CountdownStep::Done,
            };
            self.remaining = match self.current {
                CountdownStep::Count(_) => self.step,
                CountdownStep::Go => self.go_hold,
                CountdownStep::Done => Duration::ZERO,
            };
            entered.push(self.current);
        }
        if !self.is_done() {
            self.remaining -= dt;
        }
        entered
    }
}
