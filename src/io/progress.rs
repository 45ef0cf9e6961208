//! Multi-game progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for simulated games
///
/// Shows one bar per game for small runs and adds a single batch bar once
/// there are more games than individual bars, keeping only the most recent
/// games visible.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    game_bars: Vec<ProgressBar>,
    /// Stores (`label`, `levels_done`, `level_count`, `score`) per game
    game_states: Vec<(String, usize, usize, u64)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>10} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Games: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            game_bars: Vec::new(),
            game_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on game count
    pub fn initialize(&mut self, game_count: usize) {
        // Switch to batch mode for large runs to avoid terminal spam
        if game_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(game_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..game_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.game_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress for a new game
    pub fn start_game(&mut self, index: usize, level_count: usize) {
        if index >= self.game_states.len() {
            self.game_states.resize(index + 1, (String::new(), 0, 0, 0));
        }
        if let Some(state) = self.game_states.get_mut(index) {
            *state = (format!("game {}", index + 1), 0, level_count, 0);
        }
        self.update_bars();
    }

    /// Report a finished level and the running score
    pub fn complete_level(&mut self, index: usize, score: u64) {
        if let Some(state) = self.game_states.get_mut(index) {
            state.1 = (state.1 + 1).min(state.2);
            state.3 = score;
        }
        self.update_bars();
    }

    /// Mark game as finished and update batch progress
    pub fn complete_game(&mut self, index: usize, completed: bool) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.game_states.get_mut(index) {
            let mark = if completed { "✓" } else { "✗" };
            state.0 = format!("{mark} {}", state.0);
        }
        self.update_bars();
    }

    /// Games started so far
    pub fn tracked_games(&self) -> usize {
        self.game_states.len()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All games played");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active games
    fn update_bars(&self) {
        let active: Vec<_> = self
            .game_states
            .iter()
            .filter(|(label, ..)| !label.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (label, done, total, score)) in visible.iter().enumerate() {
            if let Some(bar) = self.game_bars.get(bar_idx) {
                bar.set_length(*total as u64);
                bar.set_position(*done as u64);
                bar.set_message(format!("level {done}/{total}  score {score}"));
                bar.set_prefix(label.clone());
            }
        }

        for bar_idx in visible.len()..self.game_bars.len() {
            if let Some(bar) = self.game_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
