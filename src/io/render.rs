//! Text rendering of the board for the terminal front end

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::algorithm::path::LinkPath;
use crate::spatial::{Board, Position};

/// Character drawn on path cells that hold no tile
pub const PATH_MARK: char = '*';

/// Draw the board with row and column labels
///
/// The selected cell is wrapped in brackets and, when a path is given,
/// the cells it walks through (margin included) are marked.
pub fn render_board(
    board: &Board,
    selection: Option<Position>,
    path: Option<&LinkPath>,
) -> String {
    let walked: HashSet<Position> = path
        .map(LinkPath::cells)
        .unwrap_or_default()
        .into_iter()
        .collect();
    let rows = board.rows() as i32;
    let cols = board.cols() as i32;
    let mut out = String::new();

    out.push_str("    ");
    for col in -1..=cols {
        if (0..cols).contains(&col) {
            let _ = write!(out, "{col:>3}");
        } else {
            out.push_str("   ");
        }
    }
    out.push('\n');

    for row in -1..=rows {
        if (0..rows).contains(&row) {
            let _ = write!(out, "{row:>3} ");
        } else {
            out.push_str("    ");
        }
        for col in -1..=cols {
            let pos = Position::new(row, col);
            let symbol = match board.kind_at(pos) {
                Some(kind) => kind.letter(),
                None if walked.contains(&pos) => PATH_MARK,
                None if board.contains(pos) => '.',
                None => ' ',
            };
            if selection == Some(pos) {
                let _ = write!(out, "[{symbol}]");
            } else {
                let _ = write!(out, " {symbol} ");
            }
        }
        out.push('\n');
    }

    out
}
