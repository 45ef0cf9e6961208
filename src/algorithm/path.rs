//! Connectivity check between two tiles with at most two bends
//!
//! Routes are tried in increasing complexity and the first success wins:
//! a straight line, then an L through `(a.row, b.col)` and `(b.row, a.col)`,
//! then U and Z shapes through every candidate column from `-1` to `cols`
//! followed by every candidate row from `-1` to `rows`. Routes may run
//! through the one-cell margin around the board but never over a third tile.

use crate::algorithm::segment::{Endpoints, interior_cells, is_clear, segment_clear};
use crate::io::configuration::BOARD_MARGIN;
use crate::spatial::{Board, Position};

/// Corner points of a connecting route, endpoints included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPath {
    corners: Vec<Position>,
}

impl LinkPath {
    fn from_points(points: &[Position]) -> Self {
        let mut corners: Vec<Position> = Vec::with_capacity(points.len());
        for &point in points {
            if corners.last() == Some(&point) {
                continue;
            }
            // A pivot in line with its neighbours is not a turn
            if let [.., before, pivot] = corners.as_slice() {
                let same_row = before.row == pivot.row && pivot.row == point.row;
                let same_col = before.col == pivot.col && pivot.col == point.col;
                if same_row || same_col {
                    corners.pop();
                }
            }
            corners.push(point);
        }
        Self { corners }
    }

    /// Endpoints and pivots in walking order
    pub fn corners(&self) -> &[Position] {
        &self.corners
    }

    /// Number of right-angle turns along the route
    pub const fn bends(&self) -> usize {
        self.corners.len().saturating_sub(2)
    }

    /// Every cell walked, endpoints and corners included
    pub fn cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        let mut legs = self.corners.windows(2).peekable();
        if legs.peek().is_none() {
            cells.extend(self.corners.iter().copied());
        }
        while let Some([from, to]) = legs.next() {
            cells.push(*from);
            cells.extend(interior_cells(*from, *to).unwrap_or_default());
            if legs.peek().is_none() {
                cells.push(*to);
            }
        }
        cells
    }

    /// Number of cells walked between the two endpoints
    pub fn length(&self) -> usize {
        self.cells().len().saturating_sub(1)
    }
}

/// Check whether two tiles can be matched
///
/// Returns `false` for the same cell, empty or off-board endpoints,
/// and tiles of different kinds.
pub fn can_connect(board: &Board, a: Position, b: Position) -> bool {
    find_path(board, a, b).is_some()
}

/// Find the first connecting route between two tiles
///
/// Uses the same ordering as [`can_connect`], returning the corners of
/// the route it accepted.
pub fn find_path(board: &Board, a: Position, b: Position) -> Option<LinkPath> {
    if a == b {
        return None;
    }
    let kind_a = board.kind_at(a)?;
    let kind_b = board.kind_at(b)?;
    if kind_a != kind_b {
        return None;
    }

    let endpoints = Endpoints::new(a, b);

    straight(board, a, b, endpoints)
        .or_else(|| one_bend(board, a, b, endpoints))
        .or_else(|| two_bends(board, a, b, endpoints))
}

fn straight(board: &Board, a: Position, b: Position, endpoints: Endpoints) -> Option<LinkPath> {
    (a.is_aligned_with(b) && segment_clear(board, a, b, endpoints))
        .then(|| LinkPath::from_points(&[a, b]))
}

fn one_bend(board: &Board, a: Position, b: Position, endpoints: Endpoints) -> Option<LinkPath> {
    [Position::new(a.row, b.col), Position::new(b.row, a.col)]
        .into_iter()
        .find(|&pivot| routes_through(board, &[a, pivot, b], endpoints))
        .map(|pivot| LinkPath::from_points(&[a, pivot, b]))
}

fn two_bends(board: &Board, a: Position, b: Position, endpoints: Endpoints) -> Option<LinkPath> {
    let rows = board.rows() as i32;
    let cols = board.cols() as i32;

    let via_columns = (-BOARD_MARGIN..cols + BOARD_MARGIN).find_map(|col| {
        let route = [a, Position::new(a.row, col), Position::new(b.row, col), b];
        routes_through(board, &route, endpoints).then(|| LinkPath::from_points(&route))
    });

    via_columns.or_else(|| {
        (-BOARD_MARGIN..rows + BOARD_MARGIN).find_map(|row| {
            let route = [a, Position::new(row, a.col), Position::new(row, b.col), b];
            routes_through(board, &route, endpoints).then(|| LinkPath::from_points(&route))
        })
    })
}

// Inner points are pivots and must be clear; every leg must be clear too
fn routes_through(board: &Board, route: &[Position], endpoints: Endpoints) -> bool {
    let pivots = route.get(1..route.len().saturating_sub(1)).unwrap_or(&[]);
    pivots.iter().all(|&pivot| is_clear(board, pivot, endpoints))
        && route
            .windows(2)
            .all(|leg| matches!(leg, [from, to] if segment_clear(board, *from, *to, endpoints)))
}
