//! Straight-line segment checks between two cells

use crate::spatial::{Board, CellState, Position};

/// The two tiles being connected
///
/// They never block each other, so a route may pass over either one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    /// First selected tile
    pub first: Position,
    /// Second selected tile
    pub second: Position,
}

impl Endpoints {
    /// Pair up two positions
    pub const fn new(first: Position, second: Position) -> Self {
        Self { first, second }
    }

    const fn contains(self, pos: Position) -> bool {
        (pos.row == self.first.row && pos.col == self.first.col)
            || (pos.row == self.second.row && pos.col == self.second.col)
    }
}

/// Check whether a single cell lets a path through
///
/// Margin cells and empty cells are clear, as are the two endpoints.
/// Cells beyond the margin and third tiles are not.
pub fn is_clear(board: &Board, pos: Position, endpoints: Endpoints) -> bool {
    if endpoints.contains(pos) {
        return true;
    }
    match board.cell(pos) {
        CellState::Margin | CellState::Empty => true,
        CellState::OffGrid | CellState::Occupied(_) => false,
    }
}

/// Cells strictly between two aligned positions, in walking order
///
/// Returns `None` when the positions share neither a row nor a column.
pub fn interior_cells(from: Position, to: Position) -> Option<Vec<Position>> {
    if from.row == to.row {
        let step = (to.col - from.col).signum();
        let cells = (1..(to.col - from.col).abs())
            .map(|offset| Position::new(from.row, from.col + step * offset))
            .collect();
        Some(cells)
    } else if from.col == to.col {
        let step = (to.row - from.row).signum();
        let cells = (1..(to.row - from.row).abs())
            .map(|offset| Position::new(from.row + step * offset, from.col))
            .collect();
        Some(cells)
    } else {
        None
    }
}

/// Check that every cell strictly between two aligned positions is clear
///
/// The segment's own ends are not tested; callers check pivots separately.
/// Unaligned positions never form a segment.
pub fn segment_clear(board: &Board, from: Position, to: Position, endpoints: Endpoints) -> bool {
    interior_cells(from, to).is_some_and(|cells| {
        cells
            .into_iter()
            .all(|pos| is_clear(board, pos, endpoints))
    })
}
