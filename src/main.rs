//! xp-progression - Entry Point
//!
//! Small inspector for the XP curve: look up a level, check a level-up,
//! print the threshold table, or export the editable rank table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use xp_progression::data;
use xp_progression::progression::{
    level_up, total_xp_for_level, LevelProgress, LevelUp, RankTable, Xp, MAX_LEVEL,
};

#[derive(Parser)]
#[command(name = "xp-progression", version, about = "Inspect the XP level curve")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Rank table to use instead of the default search path
    #[arg(long, global = true, value_name = "PATH")]
    ranks: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show level and progress for an XP total
    Level { xp: Xp },
    /// Check whether going from OLD_XP to NEW_XP is a level-up
    LevelUp { old_xp: Xp, new_xp: Xp },
    /// Print total XP thresholds per level
    Table {
        #[arg(long, default_value_t = 10)]
        max_level: u32,
    },
    /// Write the default ranks.ron into DIR
    ExportRanks { dir: PathBuf },
}

#[derive(Serialize)]
struct LevelReport<'a> {
    #[serde(flatten)]
    progress: LevelProgress,
    title: &'a str,
}

#[derive(Serialize)]
struct LevelUpReport {
    leveled_up: bool,
    #[serde(flatten)]
    event: Option<LevelUp>,
}

#[derive(Serialize)]
struct ThresholdRow {
    level: u32,
    total_xp: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    )
    .init();

    let cli = Cli::parse();
    log::debug!("Starting xp-progression v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Level { xp } => {
            let ranks = load_ranks(cli.ranks.as_deref())?;
            let progress = LevelProgress::from_xp(xp.value());
            let title = ranks.title_for(progress.level);
            if cli.json {
                print_json(&LevelReport { progress, title })?;
            } else {
                println!("Level {} ({})", progress.level, title);
                println!(
                    "{:.1}% through level, {} XP to level {}",
                    progress.percent,
                    progress.xp_remaining,
                    progress.level + 1
                );
            }
        }
        Command::LevelUp { old_xp, new_xp } => {
            let event = level_up(old_xp.value(), new_xp.value());
            if cli.json {
                print_json(&LevelUpReport { leveled_up: event.is_some(), event })?;
            } else {
                match event {
                    Some(event) => println!(
                        "Level up! {} -> {} (+{})",
                        event.from_level,
                        event.to_level,
                        event.levels_gained()
                    ),
                    None => println!("No level up (level {})", new_xp.level()),
                }
            }
        }
        Command::Table { max_level } => {
            let max_level = max_level.clamp(1, MAX_LEVEL);
            let rows = (1..=max_level)
                .map(|level| {
                    total_xp_for_level(level).map(|total_xp| ThresholdRow { level, total_xp })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if cli.json {
                print_json(&rows)?;
            } else {
                for row in rows {
                    println!("{:>3}  {:>20}", row.level, row.total_xp);
                }
            }
        }
        Command::ExportRanks { dir } => {
            let path = data::export_default_ranks(&dir)
                .with_context(|| format!("exporting rank table to {:?}", dir))?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// An explicit --ranks file must load; otherwise fall back quietly
fn load_ranks(path: Option<&std::path::Path>) -> Result<RankTable> {
    match path {
        Some(path) => data::load_rank_table(path)
            .with_context(|| format!("loading rank table {:?}", path)),
        None => Ok(data::load_ranks()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{}", json);
    Ok(())
}
