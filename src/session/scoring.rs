//! Points awarded for matches and level clears

use std::time::Duration;

use crate::io::configuration::{MATCH_POINTS, TIME_BONUS_PER_SECOND};

fn scaled(points: u64, multiplier: f64) -> u64 {
    let value = (points as f64 * multiplier).round();
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}

/// Points for removing one pair
pub fn match_points(multiplier: f64) -> u64 {
    scaled(MATCH_POINTS, multiplier)
}

/// Bonus for clearing the board with time to spare
///
/// Only whole remaining seconds count.
pub fn clear_bonus(remaining: Duration, multiplier: f64) -> u64 {
    scaled(
        remaining.as_secs().saturating_mul(TIME_BONUS_PER_SECOND),
        multiplier,
    )
}
