use std::time::Duration;

/// The single tick source of a session. Time is fed in from outside, so
/// there is exactly one timer per session by construction; `start` re-arms
/// from zero rather than stacking a second schedule on top of the first.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        TickTimer {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks that became due during `dt`.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }
        due
    }
}
