use rand::Rng;

use crate::algorithm::hint::has_available_match;
use crate::io::error::{GameError, Result};
use crate::spatial::{Board, layout};

/// Check if tiles remain but none of them can be matched
pub fn is_deadlocked(board: &Board) -> bool {
    !board.is_cleared() && !has_available_match(board)
}

/// Reshuffle a deadlocked board until a match becomes available
///
/// Returns the number of reshuffles performed, zero when the board was
/// already playable or empty.
///
/// # Errors
///
/// Returns [`GameError::Deadlock`] when `max_attempts` reshuffles all leave
/// the board without a match
pub fn resolve_deadlock<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    max_attempts: usize,
) -> Result<usize> {
    if !is_deadlocked(board) {
        return Ok(0);
    }

    for attempt in 1..=max_attempts {
        layout::reshuffle(board, rng);
        if has_available_match(board) {
            tracing::warn!(
                attempts = attempt,
                tiles = board.tile_count(),
                "board deadlocked, reshuffled"
            );
            return Ok(attempt);
        }
    }

    Err(GameError::Deadlock {
        attempts: max_attempts,
        remaining_tiles: board.tile_count(),
    })
}
