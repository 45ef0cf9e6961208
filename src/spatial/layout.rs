//! Paired tile layouts and in-place reshuffling

use rand::Rng;
use rand::seq::SliceRandom;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Board;
use crate::spatial::tiles::{Position, TileKind};

/// Kind assigned to every cell of a full board before shuffling
///
/// Pair `i` gets kind `i % kinds`, so each kind appears an even number of
/// times and the counts differ by at most two.
///
/// # Errors
///
/// Returns an error if the cell count is odd, `kinds` is zero, or there are
/// more kinds than pairs
pub fn paired_kinds(cell_count: usize, kinds: usize) -> Result<Vec<TileKind>> {
    if cell_count % 2 != 0 {
        return Err(invalid_parameter(
            "cell_count",
            &cell_count,
            &"board must have an even number of cells",
        ));
    }
    let pairs = cell_count / 2;
    if kinds == 0 || kinds > pairs {
        return Err(invalid_parameter(
            "kinds",
            &kinds,
            &format!("must be between 1 and {pairs}"),
        ));
    }
    let kind_limit = u16::try_from(kinds)
        .map_err(|e| invalid_parameter("kinds", &kinds, &e))?;

    let mut multiset = Vec::with_capacity(cell_count);
    for pair in 0..pairs {
        let kind = TileKind((pair % usize::from(kind_limit)) as u16);
        multiset.push(kind);
        multiset.push(kind);
    }
    Ok(multiset)
}

/// Build a full board by shuffling paired kinds into every cell
///
/// # Errors
///
/// Returns an error if the dimensions and kind count cannot form pairs
pub fn generate_board<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    kinds: usize,
    rng: &mut R,
) -> Result<Board> {
    let mut multiset = paired_kinds(rows * cols, kinds)?;
    multiset.shuffle(rng);
    Board::from_cells(rows, cols, multiset.into_iter().map(Some).collect())
}

/// Permute the remaining tiles among the occupied cells
///
/// Empty cells stay empty and the multiset of kinds is unchanged.
pub fn reshuffle<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    let (positions, mut kinds): (Vec<Position>, Vec<TileKind>) = board
        .tiles()
        .map(|tile| (tile.position, tile.kind))
        .unzip();
    kinds.shuffle(rng);

    for (position, kind) in positions.into_iter().zip(kinds) {
        // Positions come from the board itself
        let _ = board.place(position, kind);
    }
}
