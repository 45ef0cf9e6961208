//! Tile-matching connect game where two tiles of the same kind are removed
//! when an orthogonal path with at most two bends joins them
//!
//! Paths may run through a one-cell margin around the board but never over
//! another tile. The crate holds the board model, the path checker, the game
//! session that turns clicks into matches, and a headless auto player.

#![forbid(unsafe_code)]

/// Path checking, hints, deadlock handling and the auto player
pub mod algorithm;
/// Game data, command line, rendering and exports
pub mod io;
/// Match and removal controller with scoring and timers
pub mod session;
/// Board state, tile kinds and layouts
pub mod spatial;

pub use algorithm::path::{LinkPath, can_connect, find_path};
pub use io::error::{GameError, Result};
