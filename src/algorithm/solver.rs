//! Headless player that drives a session by picking available matches
//!
//! Used by the simulator, the benchmarks and tests. Each move picks one of
//! the currently available pairs uniformly at random, selects both tiles
//! and then advances the level timer by a fixed think time.

use rand::seq::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;

use crate::algorithm::hint::available_matches;
use crate::io::error::Result;
use crate::io::visualization::ReplayCapture;
use crate::session::{GameSession, SelectOutcome, SessionStatus};

/// Outcome of one level played by the auto player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelReport {
    /// Zero-based level index
    pub level: usize,
    /// Status when play stopped
    pub status: SessionStatus,
    /// Total score after the level
    pub score: u64,
    /// Matches made on the level
    pub matches: usize,
    /// Reshuffles performed on the level
    pub reshuffles: usize,
    /// Simulated time spent on the level
    pub elapsed: Duration,
}

impl LevelReport {
    /// Check if the board was emptied
    pub const fn cleared(&self) -> bool {
        matches!(
            self.status,
            SessionStatus::LevelCleared | SessionStatus::Completed
        )
    }
}

/// Outcome of a full game played by the auto player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    /// One report per level attempted
    pub levels: Vec<LevelReport>,
    /// Final score
    pub score: u64,
    /// Whether every level was cleared
    pub completed: bool,
}

/// Seeded automatic player
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: StdRng,
    move_time: Duration,
}

impl AutoPlayer {
    /// Create a deterministic player spending `move_time` per move
    pub fn new(seed: u64, move_time: Duration) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            move_time,
        }
    }

    /// Make a single match on the session's board
    ///
    /// Returns `false` when the session is not playing or no match exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the session fails to reshuffle after the match
    pub fn play_move(&mut self, session: &mut GameSession) -> Result<bool> {
        if session.status() != SessionStatus::Playing {
            return Ok(false);
        }
        let candidates = available_matches(session.board());
        let Some(choice) = candidates.choose(&mut self.rng) else {
            return Ok(false);
        };

        // Drop any stale selection so the pair is judged on its own
        if let Some(selected) = session.selection() {
            session.select(selected)?;
        }
        session.select(choice.first)?;
        let outcome = session.select(choice.second)?;
        session.update(self.move_time);

        Ok(matches!(outcome, SelectOutcome::Matched(_)))
    }

    /// Play the current level until it is cleared, lost or stuck
    ///
    /// # Errors
    ///
    /// Returns an error if the session fails to reshuffle a deadlocked board
    pub fn play_level(
        &mut self,
        session: &mut GameSession,
        mut capture: Option<&mut ReplayCapture>,
    ) -> Result<LevelReport> {
        if let Some(capture) = capture.as_deref_mut() {
            capture.record(session.board());
        }

        while self.play_move(session)? {
            if let Some(capture) = capture.as_deref_mut() {
                capture.record(session.board());
            }
        }

        Ok(LevelReport {
            level: session.level_index(),
            status: session.status(),
            score: session.score(),
            matches: session.matches(),
            reshuffles: session.reshuffles(),
            elapsed: session.elapsed(),
        })
    }

    /// Play every level in order, stopping at the first lost level
    ///
    /// # Errors
    ///
    /// Returns an error if a level cannot be dealt or reshuffled
    pub fn play_game(&mut self, session: &mut GameSession) -> Result<GameReport> {
        let mut levels = Vec::with_capacity(session.level_count());
        loop {
            levels.push(self.play_level(session, None)?);
            if !session.advance_level()? {
                break;
            }
        }

        Ok(GameReport {
            score: session.score(),
            completed: session.status() == SessionStatus::Completed,
            levels,
        })
    }
}
