//! Countdown for the time limit of a level

use std::time::Duration;

/// Level countdown advanced by the host's frame ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTimer {
    limit: Duration,
    elapsed: Duration,
}

impl LevelTimer {
    /// Start a countdown with the full limit remaining
    pub const fn new(limit: Duration) -> Self {
        Self {
            limit,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the countdown, returning whether it has run out
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.limit);
        self.is_expired()
    }

    /// Check if no time remains
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.limit
    }

    /// Time left before the level is lost
    pub const fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed)
    }

    /// Remaining time truncated to whole seconds
    pub const fn remaining_whole_seconds(&self) -> u64 {
        self.remaining().as_secs()
    }

    /// Time spent on the level so far
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Full time limit
    pub const fn limit(&self) -> Duration {
        self.limit
    }
}
