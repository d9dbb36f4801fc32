//! Data loading
//!
//! Handles loading editable progression data from external RON files.

pub mod loader;

pub use loader::{
    DataError, RANKS_FILE,
    load_rank_table, load_ranks, load_ranks_from, export_default_ranks,
    assets_dir, config_dir, search_dirs,
};
