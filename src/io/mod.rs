//! Input/output: game data, command line, rendering and exports

/// Command-line interface and terminal front end
pub mod cli;
/// Game constants and runtime defaults
pub mod configuration;
/// `data.json` loading, validation and asset checks
pub mod data;
/// Error types for all game operations
pub mod error;
/// PNG board snapshots and tile palettes
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress display for simulated games
pub mod progress;
/// Text rendering of the board
pub mod render;
/// GIF replays of played levels
pub mod visualization;
