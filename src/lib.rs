//! xp-progression - XP and level progression for a science-learning game
//!
//! Turns a learner's cumulative XP into a level, progress through the
//! current level, and level-up events. The curve is exponential: each level
//! costs twice as much XP as the one before.

pub mod progression;
pub mod data;

// Re-export commonly used types
pub use progression::{Experience, LevelProgress, LevelUp, ProgressionError, RankTable, Xp};
pub use progression::{level_for_xp, total_xp_for_level, xp_for_next_level, progress_to_next_level, xp_remaining_to_next_level, did_level_up};
