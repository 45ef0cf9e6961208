//! Match and removal controller owning all state of a running game
//!
//! The session turns cell selections into matches, keeps score, counts the
//! level timer down on each host tick and moves through the level list.

use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;

use crate::algorithm::deadlock::resolve_deadlock;
use crate::algorithm::hint::{Hint, find_hint};
use crate::algorithm::path::{LinkPath, find_path};
use crate::io::configuration::MAX_RESHUFFLE_ATTEMPTS;
use crate::io::data::LevelConfig;
use crate::io::error::{GameError, Result, invalid_level};
use crate::session::scoring::{clear_bonus, match_points};
use crate::session::timer::LevelTimer;
use crate::spatial::{Board, Position, TileKind, layout};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Board has tiles and time remains
    Playing,
    /// Board emptied, waiting for `advance_level`
    LevelCleared,
    /// Timer ran out before the board was emptied
    TimeUp,
    /// Last level cleared
    Completed,
}

/// A successful pairing reported by [`GameSession::select`]
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEvent {
    /// Tile selected first
    pub first: Position,
    /// Tile selected second
    pub second: Position,
    /// Kind of both tiles
    pub kind: TileKind,
    /// Route connecting them
    pub path: LinkPath,
    /// Points earned by the match itself
    pub points: u64,
    /// Time bonus earned if the match cleared the board
    pub clear_bonus: u64,
    /// Reshuffles needed to leave the board playable afterwards
    pub reshuffles: usize,
}

/// Result of selecting a cell
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// Not playing, or the cell holds no tile
    Ignored,
    /// Cell became the current selection
    Selected(Position),
    /// Current selection was clicked again and dropped
    Deselected(Position),
    /// Pair cannot be matched; the newer cell is now selected
    Rejected {
        /// Previously selected cell
        previous: Position,
        /// Newly selected cell
        current: Position,
    },
    /// Pair removed from the board
    Matched(MatchEvent),
}

/// Complete state of a game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    levels: Vec<LevelConfig>,
    level_index: usize,
    level: LevelConfig,
    board: Board,
    timer: LevelTimer,
    score: u64,
    level_start_score: u64,
    selection: Option<Position>,
    status: SessionStatus,
    matches: usize,
    reshuffles: usize,
    rng: StdRng,
}

impl GameSession {
    /// Validate the levels and deal the first board
    ///
    /// # Errors
    ///
    /// Returns an error if the level list is empty, a level is invalid, or
    /// the first board cannot be made playable
    pub fn new(levels: Vec<LevelConfig>, seed: u64) -> Result<Self> {
        let first = levels.first().cloned().ok_or_else(|| GameError::InvalidParameter {
            parameter: "levels",
            value: "[]".to_string(),
            reason: "at least one level is required".to_string(),
        })?;
        for (index, level) in levels.iter().enumerate() {
            level.validate(index)?;
        }

        let mut session = Self {
            levels,
            level_index: 0,
            level: first,
            board: Board::empty(0, 0),
            timer: LevelTimer::new(Duration::ZERO),
            score: 0,
            level_start_score: 0,
            selection: None,
            status: SessionStatus::Playing,
            matches: 0,
            reshuffles: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        session.start_level(0)?;
        Ok(session)
    }

    /// Resume play on a prepared board instead of a dealt one
    ///
    /// Used for fixed puzzles and replaying saved positions. The board
    /// must be playable as given; it is not reshuffled.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is invalid
    pub fn with_board(level: LevelConfig, board: Board, seed: u64) -> Result<Self> {
        level.validate(0)?;
        let timer = LevelTimer::new(Duration::from_secs(level.time_limit_seconds));
        let status = if board.is_cleared() {
            SessionStatus::Completed
        } else {
            SessionStatus::Playing
        };
        Ok(Self {
            levels: vec![level.clone()],
            level_index: 0,
            level,
            board,
            timer,
            score: 0,
            level_start_score: 0,
            selection: None,
            status,
            matches: 0,
            reshuffles: 0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Deal a fresh board for the level at `index` and start its timer
    ///
    /// The score earned so far is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no such level or its board cannot be
    /// made playable
    pub fn start_level(&mut self, index: usize) -> Result<()> {
        self.deal_level(index, self.score)
    }

    // Nothing changes unless the new board is dealt successfully
    fn deal_level(&mut self, index: usize, start_score: u64) -> Result<()> {
        let level = self
            .levels
            .get(index)
            .cloned()
            .ok_or_else(|| invalid_level(index, &"no such level"))?;

        let mut board =
            layout::generate_board(level.rows, level.cols, level.num_animal_types, &mut self.rng)?;
        let reshuffles = resolve_deadlock(&mut board, &mut self.rng, MAX_RESHUFFLE_ATTEMPTS)?;

        self.level_index = index;
        self.board = board;
        self.timer = LevelTimer::new(Duration::from_secs(level.time_limit_seconds));
        self.score = start_score;
        self.level_start_score = start_score;
        self.selection = None;
        self.status = SessionStatus::Playing;
        self.matches = 0;
        self.reshuffles = reshuffles;

        tracing::info!(
            level = index,
            rows = level.rows,
            cols = level.cols,
            kinds = level.num_animal_types,
            time_limit = level.time_limit_seconds,
            "level started"
        );
        self.level = level;
        Ok(())
    }

    /// Handle a click on a board cell
    ///
    /// # Errors
    ///
    /// Returns an error only if a deadlocked board cannot be reshuffled
    /// into a playable one after a match
    pub fn select(&mut self, pos: Position) -> Result<SelectOutcome> {
        if self.status != SessionStatus::Playing || self.board.kind_at(pos).is_none() {
            return Ok(SelectOutcome::Ignored);
        }

        let Some(previous) = self.selection else {
            self.selection = Some(pos);
            return Ok(SelectOutcome::Selected(pos));
        };

        if previous == pos {
            self.selection = None;
            return Ok(SelectOutcome::Deselected(pos));
        }

        let Some(path) = find_path(&self.board, previous, pos) else {
            tracing::debug!(%previous, current = %pos, "pair rejected");
            self.selection = Some(pos);
            return Ok(SelectOutcome::Rejected {
                previous,
                current: pos,
            });
        };

        self.remove_pair(previous, pos, path).map(SelectOutcome::Matched)
    }

    fn remove_pair(
        &mut self,
        first: Position,
        second: Position,
        path: LinkPath,
    ) -> Result<MatchEvent> {
        let kind = self.board.remove(first);
        self.board.remove(second);
        self.selection = None;
        self.matches += 1;

        let multiplier = self.level().score_multiplier;
        let points = match_points(multiplier);
        self.score = self.score.saturating_add(points);

        let mut bonus = 0;
        let mut reshuffles = 0;
        if self.board.is_cleared() {
            bonus = clear_bonus(self.timer.remaining(), multiplier);
            self.score = self.score.saturating_add(bonus);
            self.status = if self.level_index + 1 < self.levels.len() {
                SessionStatus::LevelCleared
            } else {
                SessionStatus::Completed
            };
            tracing::info!(
                level = self.level_index,
                score = self.score,
                bonus,
                remaining_secs = self.timer.remaining_whole_seconds(),
                "level cleared"
            );
        } else {
            reshuffles = resolve_deadlock(&mut self.board, &mut self.rng, MAX_RESHUFFLE_ATTEMPTS)?;
            self.reshuffles += reshuffles;
        }

        tracing::debug!(%first, %second, points, tiles = self.board.tile_count(), "pair matched");

        Ok(MatchEvent {
            first,
            second,
            kind: kind.unwrap_or(TileKind(0)),
            path,
            points,
            clear_bonus: bonus,
            reshuffles,
        })
    }

    /// Advance the level timer by one host tick
    ///
    /// Returns the status after the tick.
    pub fn update(&mut self, dt: Duration) -> SessionStatus {
        if self.status == SessionStatus::Playing && self.timer.tick(dt) {
            self.status = SessionStatus::TimeUp;
            self.selection = None;
            tracing::info!(
                level = self.level_index,
                tiles = self.board.tile_count(),
                "time up"
            );
        }
        self.status
    }

    /// Move on after a cleared level
    ///
    /// Returns `false` when there is no cleared level to move on from.
    ///
    /// # Errors
    ///
    /// Returns an error if the next board cannot be made playable
    pub fn advance_level(&mut self) -> Result<bool> {
        if self.status != SessionStatus::LevelCleared {
            return Ok(false);
        }
        self.start_level(self.level_index + 1)?;
        Ok(true)
    }

    /// Deal the current level again and restore the score it started with
    ///
    /// # Errors
    ///
    /// Returns an error if the new board cannot be made playable
    pub fn restart_level(&mut self) -> Result<()> {
        self.deal_level(self.level_index, self.level_start_score)
    }

    /// First available match on the current board
    pub fn hint(&self) -> Option<Hint> {
        if self.status == SessionStatus::Playing {
            find_hint(&self.board)
        } else {
            None
        }
    }

    /// Reshuffle the remaining tiles on request
    ///
    /// Returns the number of reshuffles performed, including any extra ones
    /// needed to leave a match available.
    ///
    /// # Errors
    ///
    /// Returns an error if no playable arrangement is found
    pub fn shuffle(&mut self) -> Result<usize> {
        if self.status != SessionStatus::Playing {
            return Ok(0);
        }
        layout::reshuffle(&mut self.board, &mut self.rng);
        self.selection = None;
        let extra = resolve_deadlock(&mut self.board, &mut self.rng, MAX_RESHUFFLE_ATTEMPTS)?;
        self.reshuffles += 1 + extra;
        Ok(1 + extra)
    }

    /// Current board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Total score across levels
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Lifecycle status
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Zero-based index of the current level
    pub const fn level_index(&self) -> usize {
        self.level_index
    }

    /// Number of levels in the game
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Parameters of the current level
    pub const fn level(&self) -> &LevelConfig {
        &self.level
    }

    /// Time left on the current level
    pub const fn remaining(&self) -> Duration {
        self.timer.remaining()
    }

    /// Time spent on the current level
    pub const fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    /// Currently selected cell
    pub const fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Matches made on the current level
    pub const fn matches(&self) -> usize {
        self.matches
    }

    /// Reshuffles performed on the current level
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }
}
