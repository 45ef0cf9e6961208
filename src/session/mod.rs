//! Game session: selections, matches, scoring, timers and level flow

/// Session state machine and level progression
pub mod game;
/// Match and clear bonus points
pub mod scoring;
/// Level countdown
pub mod timer;

pub use game::{GameSession, MatchEvent, SelectOutcome, SessionStatus};
