//! Spatial data structures for the playing board
//!
//! This module contains board-related functionality including:
//! - Tile kinds, positions and cell classification
//! - Board state with the open margin around it
//! - Paired layouts and reshuffling

/// Board state and cell queries
pub mod grid;
/// Paired tile layouts and reshuffling
pub mod layout;
/// Tile kinds, positions and cell states
pub mod tiles;

pub use grid::Board;
pub use tiles::{CellState, Position, Tile, TileKind};
