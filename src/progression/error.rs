//! Progression error types

use thiserror::Error;

/// Errors raised when validating raw XP input or level arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// XP arrived as a negative number
    #[error("XP cannot be negative (got {0})")]
    NegativeXp(i64),

    /// XP could not be parsed as a whole number
    #[error("XP must be a whole number (got {0:?})")]
    InvalidXp(String),

    /// Levels start at 1
    #[error("level {0} is below the minimum level of 1")]
    LevelBelowMinimum(u32),

    /// Threshold for this level does not fit in a u64
    #[error("level {level} exceeds the maximum supported level {max}")]
    LevelOutOfRange { level: u32, max: u32 },
}
