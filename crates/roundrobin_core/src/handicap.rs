//! Rating-based time handicaps
//!
//! Every match starts with the same time allowance for both sides. The
//! stronger player then gives up a share of their own time proportional to
//! the rating gap, 2.5% of the difference in minutes by default.

use serde::{Deserialize, Serialize};

/// Base thinking time per side, in minutes
pub const BASE_TIME_MINUTES: i64 = 60;

/// Minutes of handicap per 1000 rating points of difference
pub const HANDICAP_PER_MILLE: i64 = 25;

/// Time allowance settings applied to every match of a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeControl {
    /// Starting allowance for each side, in minutes
    pub base_minutes: i64,
    /// Handicap rate in minutes per 1000 rating points
    pub handicap_per_mille: i64,
}

impl Default for TimeControl {
    fn default() -> Self {
        Self {
            base_minutes: BASE_TIME_MINUTES,
            handicap_per_mille: HANDICAP_PER_MILLE,
        }
    }
}

impl TimeControl {
    /// Initial `[white, black]` allowances before any handicap
    pub fn base_limits(&self) -> [i64; 2] {
        [self.base_minutes; 2]
    }
}

/// Handicap in minutes for a signed rating difference.
///
/// Truncates toward zero, so `-100` at the default rate is `-2`, not `-3`.
/// The product is taken in 128 bits and saturates at the `i64` bounds.
pub fn rating_handicap(rating_diff: i64, per_mille: i64) -> i64 {
    let minutes = i128::from(rating_diff) * i128::from(per_mille) / 1000;
    minutes.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Apply the handicap for `ratings = [side0, side1]` to `time_limits` in place.
///
/// With `side0 >= side1` the handicap comes off side 0. Otherwise the
/// (negative) handicap is added to side 1, which shortens the stronger
/// side 1's clock by the same magnitude. No lower bound is enforced: an
/// extreme rating gap can drive an allowance to zero or below. Allowances
/// saturate instead of wrapping.
pub fn apply_handicap(ratings: [i64; 2], time_limits: &mut [i64; 2], per_mille: i64) {
    let rating_diff = ratings[0].saturating_sub(ratings[1]);
    let handicap = rating_handicap(rating_diff, per_mille);
    if rating_diff >= 0 {
        time_limits[0] = time_limits[0].saturating_sub(handicap);
    } else {
        time_limits[1] = time_limits[1].saturating_add(handicap);
    }
}

#[cfg(test)]
#[path = "handicap_tests.rs"]
mod handicap_tests;
