//! Experience tracking and level-up events
//!
//! Higher-level helpers built on the XP curve: a progress snapshot for
//! rendering, a level-up event for reward handling, and a cumulative tracker.

use serde::{Deserialize, Serialize};

use super::xp::{
    level_for_xp, progress_to_next_level, total_xp_for_level, xp_for_next_level,
    xp_remaining_to_next_level,
};

/// Everything a level badge or progress bar needs, computed once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Cumulative XP
    pub xp: u64,
    /// Current level
    pub level: u32,
    /// Total XP at which the current level started
    pub level_floor_xp: u64,
    /// Total XP at which the next level starts
    pub next_level_xp: u64,
    /// XP earned inside the current band
    pub xp_into_level: u64,
    /// Width of the current band
    pub level_span: u64,
    /// XP still needed for the next level
    pub xp_remaining: u64,
    /// Percent through the current band, in [0, 100)
    pub percent: f64,
}

impl LevelProgress {
    pub fn from_xp(xp: u64) -> Self {
        let level = level_for_xp(xp);
        // level_for_xp never returns a level outside the curve's range
        let level_floor_xp = total_xp_for_level(level).unwrap_or(0);
        let xp_remaining = xp_remaining_to_next_level(xp);

        Self {
            xp,
            level,
            level_floor_xp,
            next_level_xp: xp.saturating_add(xp_remaining),
            xp_into_level: xp - level_floor_xp,
            level_span: xp_for_next_level(xp),
            xp_remaining,
            percent: progress_to_next_level(xp),
        }
    }
}

/// A level boundary crossing between two XP readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub from_level: u32,
    pub to_level: u32,
}

impl LevelUp {
    /// Number of levels crossed (a large award can skip several)
    pub fn levels_gained(&self) -> u32 {
        self.to_level - self.from_level
    }
}

/// Detect a level-up between two XP readings
///
/// Returns `Some` exactly when [`did_level_up`](super::xp::did_level_up) is true.
pub fn level_up(old_xp: u64, new_xp: u64) -> Option<LevelUp> {
    let from_level = level_for_xp(old_xp);
    let to_level = level_for_xp(new_xp);
    (to_level > from_level).then_some(LevelUp { from_level, to_level })
}

/// Cumulative lifetime XP for one learner
///
/// XP only ever goes up; awards saturate at `u64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub total_xp: u64,
}

impl Experience {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a stored XP total
    pub fn with_xp(total_xp: u64) -> Self {
        Self { total_xp }
    }

    pub fn level(&self) -> u32 {
        level_for_xp(self.total_xp)
    }

    pub fn progress(&self) -> LevelProgress {
        LevelProgress::from_xp(self.total_xp)
    }

    /// Add XP and return the level-up it caused, if any
    pub fn add_xp(&mut self, amount: u64) -> Option<LevelUp> {
        let old_xp = self.total_xp;
        self.total_xp = old_xp.saturating_add(amount);

        let event = level_up(old_xp, self.total_xp);
        if let Some(event) = event {
            log::debug!(
                "Level up: {} -> {} ({} XP total)",
                event.from_level,
                event.to_level,
                self.total_xp
            );
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::xp::{did_level_up, MAX_LEVEL};

    #[test]
    fn test_progress_snapshot() {
        let progress = LevelProgress::from_xp(250);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.level_floor_xp, 100);
        assert_eq!(progress.next_level_xp, 300);
        assert_eq!(progress.xp_into_level, 150);
        assert_eq!(progress.level_span, 200);
        assert_eq!(progress.xp_remaining, 50);
        assert_eq!(progress.percent, 75.0);
    }

    #[test]
    fn test_progress_snapshot_at_zero() {
        let progress = LevelProgress::from_xp(0);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.level_floor_xp, 0);
        assert_eq!(progress.next_level_xp, 100);
        assert_eq!(progress.xp_remaining, 100);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_progress_snapshot_at_max_xp() {
        let progress = LevelProgress::from_xp(u64::MAX);
        assert_eq!(progress.level, MAX_LEVEL);
        assert_eq!(progress.next_level_xp, u64::MAX);
        assert!(progress.xp_remaining > 0);
        assert!(progress.xp_into_level < progress.level_span);
    }

    #[test]
    fn test_level_up_matches_did_level_up() {
        let pairs = [(100, 100), (50, 100), (250, 300), (100, 200), (699, 700), (700, 0)];
        for (old, new) in pairs {
            assert_eq!(level_up(old, new).is_some(), did_level_up(old, new), "{} -> {}", old, new);
        }
    }

    #[test]
    fn test_level_up_multiple_levels() {
        let event = level_up(0, 1500).unwrap();
        assert_eq!(event.from_level, 1);
        assert_eq!(event.to_level, 5);
        assert_eq!(event.levels_gained(), 4);
    }

    #[test]
    fn test_experience_add_xp() {
        let mut exp = Experience::new();
        assert_eq!(exp.level(), 1);

        assert_eq!(exp.add_xp(50), None);
        assert_eq!(exp.add_xp(50), Some(LevelUp { from_level: 1, to_level: 2 }));
        assert_eq!(exp.total_xp, 100);

        assert_eq!(exp.add_xp(100), None);
        assert_eq!(exp.level(), 2);
        assert_eq!(exp.progress().percent, 50.0);
    }

    #[test]
    fn test_experience_saturates() {
        let mut exp = Experience::with_xp(u64::MAX - 10);
        exp.add_xp(1_000);
        assert_eq!(exp.total_xp, u64::MAX);
        assert_eq!(exp.add_xp(1), None);
        assert_eq!(exp.level(), MAX_LEVEL);
    }

    #[test]
    fn test_experience_serializes_as_total() {
        let exp = Experience::with_xp(700);
        let json = serde_json::to_string(&exp).unwrap();
        assert_eq!(json, r#"{"total_xp":700}"#);
        let back: Experience = serde_json::from_str(&json).unwrap();
        assert_eq!(back.level(), 4);
    }
}
