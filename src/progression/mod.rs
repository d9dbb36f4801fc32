//! Progression systems

pub mod xp;
pub mod experience;
pub mod ranks;
pub mod error;

pub use error::ProgressionError;
pub use xp::{Xp, BASE_LEVEL_XP, MAX_LEVEL};
pub use xp::{level_for_xp, total_xp_for_level, xp_for_next_level, progress_to_next_level, xp_remaining_to_next_level, did_level_up};
pub use experience::{Experience, LevelProgress, LevelUp, level_up};
pub use ranks::{Rank, RankTable, RankTableError, default_rank_table};
