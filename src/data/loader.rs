//! RON data loader
//!
//! Loads the rank table from an external RON file, with fallback to the
//! built-in defaults when the file is missing or broken.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::progression::ranks::{default_rank_table, RankTable, RankTableError};

/// File name of the rank table inside a data directory
pub const RANKS_FILE: &str = "ranks.ron";

/// Errors while reading or writing data files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize rank table: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid rank table in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: RankTableError,
    },
}

/// Data directory shipped next to the binary
pub fn assets_dir() -> PathBuf {
    PathBuf::from("assets/data")
}

/// Per-user config directory, if the platform has one
pub fn config_dir() -> Option<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "xp-progression", "XpProgression")
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Directories searched for data files, in priority order
pub fn search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![assets_dir()];
    dirs.extend(config_dir());
    dirs
}

/// Load and validate a rank table from a specific file
pub fn load_rank_table(path: &Path) -> Result<RankTable, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table: RankTable = ron::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    table.validate().map_err(|source| DataError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(table)
}

/// Load the first usable rank table from `dirs`, or the defaults
pub fn load_ranks_from(dirs: &[PathBuf]) -> RankTable {
    for dir in dirs {
        let path = dir.join(RANKS_FILE);
        if !path.exists() {
            continue;
        }
        match load_rank_table(&path) {
            Ok(table) => {
                log::info!("Rank table loaded from {:?}", path);
                return table;
            }
            Err(e) => log::warn!("{}, skipping", e),
        }
    }

    log::info!("Using built-in rank table");
    default_rank_table()
}

/// Load ranks from the standard search directories
pub fn load_ranks() -> RankTable {
    load_ranks_from(&search_dirs())
}

/// Write the default rank table to `dir` for editing
pub fn export_default_ranks(dir: &Path) -> Result<PathBuf, DataError> {
    fs::create_dir_all(dir).map_err(|source| DataError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let ron = ron::ser::to_string_pretty(&default_rank_table(), ron::ser::PrettyConfig::default())?;
    let path = dir.join(RANKS_FILE);
    fs::write(&path, ron).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!("Default rank table written to {:?}", path);
    Ok(path)
}
