//! Command-line configuration and logging bootstrap for the `term-2048` binary.
//!
//! Every option can also come from the environment:
//!
//! - `TERM2048_SIZE`: grid side length (default 4, 2..=16)
//! - `TERM2048_SEED`: spawn RNG seed (default: derived from the clock)
//! - `TERM2048_LOG_FILE`: write `tracing` output to this file
//!
//! Stdout belongs to the board, so logs only go to a file, and only when one is
//! configured. `RUST_LOG` filters them as usual (default `info`).

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Slide and merge tiles until the board fills up.
///
/// Keys: arrows, WASD or HJKL to move; q, Esc or Ctrl-C to quit.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "term-2048")]
#[command(version)]
pub struct Cli {
    /// Grid side length
    #[arg(
        short = 'n',
        long,
        env = "TERM2048_SIZE",
        default_value_t = DEFAULT_GRID_SIZE,
        value_parser = parse_size
    )]
    pub size: usize,

    /// Seed for tile spawns (random when omitted)
    #[arg(long, env = "TERM2048_SEED")]
    pub seed: Option<u32>,

    /// Append logs to this file
    #[arg(long, env = "TERM2048_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Configured seed, or one taken from the clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(seed_from_clock)
    }
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a whole number"))?;
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        return Err(format!(
            "grid size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"
        ));
    }
    Ok(size)
}

fn seed_from_clock() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold the high bits in so successive runs within a second still differ.
    (nanos ^ (nanos >> 32)) as u32
}

/// Install a file-backed `tracing` subscriber when `log_file` is set.
///
/// The returned guard must live until exit or buffered lines are lost.
pub fn init_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    match installed {
        Ok(()) => Ok(Some(guard)),
        // A global subscriber is already in place; dropping the guard shuts
        // the writer down.
        Err(_) => Ok(None),
    }
}
