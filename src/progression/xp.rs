//! Experience and leveling
//!
//! Exponential XP curve: reaching level N takes `100 * (2^(N-1) - 1)` total XP,
//! so every level band is twice as wide as the one before it
//! (1 -> 2 costs 100, 2 -> 3 costs 200, 3 -> 4 costs 400, ...).
//!
//! Everything here is exact integer arithmetic. Thresholds are computed in
//! `u128` so the band above the highest reachable level is still exact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ProgressionError;

/// XP cost of the first band (level 1 -> 2). Each later band doubles it.
pub const BASE_LEVEL_XP: u64 = 100;

/// Highest level whose total XP threshold fits in a `u64`.
///
/// `level_for_xp(u64::MAX)` is exactly this level, so any representable XP
/// total always has a next level to work towards.
pub const MAX_LEVEL: u32 = 58;

/// Total XP required to reach `level` (valid for `1..=MAX_LEVEL + 1`)
fn threshold(level: u32) -> u128 {
    debug_assert!((1..=MAX_LEVEL + 1).contains(&level));
    u128::from(BASE_LEVEL_XP) * ((1u128 << (level - 1)) - 1)
}

/// XP width of a level's band, i.e. `threshold(level + 1) - threshold(level)`
fn band(level: u32) -> u128 {
    u128::from(BASE_LEVEL_XP) << (level - 1)
}

// =============================================================================
// Curve
// =============================================================================

/// Calculate the level for a cumulative XP total
///
/// Returns the largest `N >= 1` with `total_xp_for_level(N) <= xp`, which is
/// `floor(log2(xp / 100 + 1)) + 1` evaluated with integer `ilog2`.
pub fn level_for_xp(xp: u64) -> u32 {
    if xp < BASE_LEVEL_XP {
        return 1;
    }
    // threshold(N) <= xp  <=>  2^(N-1) <= floor(xp / 100) + 1
    (xp / BASE_LEVEL_XP + 1).ilog2() + 1
}

/// Calculate total XP needed from zero to reach a given level
pub fn total_xp_for_level(level: u32) -> Result<u64, ProgressionError> {
    if level == 0 {
        return Err(ProgressionError::LevelBelowMinimum(level));
    }
    if level > MAX_LEVEL {
        return Err(ProgressionError::LevelOutOfRange { level, max: MAX_LEVEL });
    }
    Ok(threshold(level) as u64)
}

/// XP width of the band the player is currently in
///
/// This is the progress-bar denominator, not the total from zero.
pub fn xp_for_next_level(current_xp: u64) -> u64 {
    // band(58) = 100 * 2^57, which still fits
    band(level_for_xp(current_xp)) as u64
}

/// Percentage of the way through the current band, in `[0, 100)`
pub fn progress_to_next_level(current_xp: u64) -> f64 {
    let level = level_for_xp(current_xp);
    let into_level = u128::from(current_xp) - threshold(level);
    if into_level == 0 {
        return 0.0;
    }

    let percent = into_level as f64 / band(level) as f64 * 100.0;
    // Wide bands can round up to exactly 100 in f64
    percent.min(f64::from_bits(100f64.to_bits() - 1))
}

/// XP still needed to reach the next level. Always at least 1.
pub fn xp_remaining_to_next_level(current_xp: u64) -> u64 {
    let level = level_for_xp(current_xp);
    (threshold(level + 1) - u128::from(current_xp)) as u64
}

/// Check whether going from `old_xp` to `new_xp` crossed a level boundary
///
/// A decrease in XP never counts as a level-up.
pub fn did_level_up(old_xp: u64, new_xp: u64) -> bool {
    level_for_xp(old_xp) < level_for_xp(new_xp)
}

// =============================================================================
// Validated input
// =============================================================================

/// A validated, non-negative XP total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Xp(pub u64);

impl Xp {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Level for this XP total
    pub fn level(self) -> u32 {
        level_for_xp(self.0)
    }
}

impl From<u64> for Xp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Xp> for u64 {
    fn from(xp: Xp) -> Self {
        xp.0
    }
}

impl TryFrom<i64> for Xp {
    type Error = ProgressionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Xp)
            .map_err(|_| ProgressionError::NegativeXp(value))
    }
}

impl FromStr for Xp {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u64>() {
            return Ok(Xp(value));
        }
        match trimmed.parse::<i64>() {
            Ok(value) if value < 0 => Err(ProgressionError::NegativeXp(value)),
            _ => Err(ProgressionError::InvalidXp(s.to_string())),
        }
    }
}

impl fmt::Display for Xp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} XP", self.0)
    }
}
