//! Search for tile pairs that can currently be matched

use std::collections::BTreeMap;

use crate::algorithm::path::{LinkPath, find_path};
use crate::spatial::{Board, Position, TileKind};

/// A pair of same-kind tiles with a legal route between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// Earlier tile in row-major order
    pub first: Position,
    /// Later tile in row-major order
    pub second: Position,
    /// Route the path checker accepted
    pub path: LinkPath,
}

/// Tile positions grouped by kind, kinds ascending and positions row-major
pub fn positions_by_kind(board: &Board) -> BTreeMap<TileKind, Vec<Position>> {
    let mut groups: BTreeMap<TileKind, Vec<Position>> = BTreeMap::new();
    for tile in board.tiles() {
        groups.entry(tile.kind).or_default().push(tile.position);
    }
    groups
}

fn candidate_pairs(board: &Board) -> impl Iterator<Item = (Position, Position)> {
    positions_by_kind(board).into_values().flat_map(|positions| {
        let mut pairs = Vec::new();
        for (index, &first) in positions.iter().enumerate() {
            for &second in positions.iter().skip(index + 1) {
                pairs.push((first, second));
            }
        }
        pairs
    })
}

/// First connectable pair, or `None` when the board is cleared or deadlocked
pub fn find_hint(board: &Board) -> Option<Hint> {
    let hint = candidate_pairs(board).find_map(|(first, second)| {
        find_path(board, first, second).map(|path| Hint {
            first,
            second,
            path,
        })
    });
    tracing::trace!(found = hint.is_some(), tiles = board.tile_count(), "hint scan");
    hint
}

/// Every connectable pair in the same order [`find_hint`] scans them
pub fn available_matches(board: &Board) -> Vec<Hint> {
    candidate_pairs(board)
        .filter_map(|(first, second)| {
            find_path(board, first, second).map(|path| Hint {
                first,
                second,
                path,
            })
        })
        .collect()
}

/// Check if at least one match is available
pub fn has_available_match(board: &Board) -> bool {
    find_hint(board).is_some()
}
