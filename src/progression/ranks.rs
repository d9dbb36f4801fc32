//! Rank titles
//!
//! Display titles attached to level ranges ("Novice", "Explorer", ...).
//! The table is data-driven; see `data::loader` for loading it from RON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A title that applies from `min_level` up to the next rank's start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub min_level: u32,
    pub title: String,
}

impl Rank {
    pub fn new(min_level: u32, title: impl Into<String>) -> Self {
        Self { min_level, title: title.into() }
    }
}

/// Ordered list of ranks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTable {
    pub ranks: Vec<Rank>,
}

/// Problems with a rank table's contents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankTableError {
    #[error("rank table is empty")]
    Empty,
    #[error("first rank must start at level 1, found {0}")]
    MissingLevelOne(u32),
    #[error("rank {title:?} at level {min_level} is not above the previous rank")]
    OutOfOrder { min_level: u32, title: String },
}

impl RankTable {
    /// Build a table, checking it covers level 1 and is strictly ordered
    pub fn new(ranks: Vec<Rank>) -> Result<Self, RankTableError> {
        let table = Self { ranks };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), RankTableError> {
        let first = self.ranks.first().ok_or(RankTableError::Empty)?;
        if first.min_level != 1 {
            return Err(RankTableError::MissingLevelOne(first.min_level));
        }
        for pair in self.ranks.windows(2) {
            if pair[1].min_level <= pair[0].min_level {
                return Err(RankTableError::OutOfOrder {
                    min_level: pair[1].min_level,
                    title: pair[1].title.clone(),
                });
            }
        }
        Ok(())
    }

    /// Title for a level: the last rank whose `min_level` has been reached
    pub fn title_for(&self, level: u32) -> &str {
        self.ranks
            .iter()
            .rev()
            .find(|rank| level >= rank.min_level)
            .or_else(|| self.ranks.first())
            .map(|rank| rank.title.as_str())
            .unwrap_or("")
    }
}

impl Default for RankTable {
    fn default() -> Self {
        default_rank_table()
    }
}

/// Built-in ranks used when no data file is available
pub fn default_rank_table() -> RankTable {
    RankTable {
        ranks: vec![
            Rank::new(1, "Novice"),
            Rank::new(3, "Apprentice"),
            Rank::new(5, "Explorer"),
            Rank::new(8, "Researcher"),
            Rank::new(11, "Scientist"),
            Rank::new(15, "Professor"),
            Rank::new(20, "Laureate"),
            Rank::new(30, "Legend"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert_eq!(default_rank_table().validate(), Ok(()));
    }

    #[test]
    fn test_title_for() {
        let table = default_rank_table();
        assert_eq!(table.title_for(1), "Novice");
        assert_eq!(table.title_for(2), "Novice");
        assert_eq!(table.title_for(5), "Explorer");
        assert_eq!(table.title_for(29), "Laureate");
        assert_eq!(table.title_for(58), "Legend");
    }

    #[test]
    fn test_title_for_level_zero_uses_first_rank() {
        assert_eq!(default_rank_table().title_for(0), "Novice");
    }

    #[test]
    fn test_invalid_tables() {
        assert_eq!(RankTable::new(vec![]), Err(RankTableError::Empty));
        assert_eq!(
            RankTable::new(vec![Rank::new(2, "Late")]),
            Err(RankTableError::MissingLevelOne(2))
        );
        assert_eq!(
            RankTable::new(vec![Rank::new(1, "A"), Rank::new(4, "B"), Rank::new(4, "C")]),
            Err(RankTableError::OutOfOrder { min_level: 4, title: "C".to_string() })
        );
    }
}
