//! Command-line configuration.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::types::Difficulty;

/// Generates a perfect maze and solves it one A* expansion at a time.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Size preset used when no explicit width or height is given.
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,
    /// Maze width in cells; even values are rounded down.
    #[arg(long)]
    pub width: Option<usize>,
    /// Maze height in cells; even values are rounded down.
    #[arg(long)]
    pub height: Option<usize>,
    /// Seed for the maze carver; a random one is drawn and logged when absent.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Solve a stored `.labmap` file instead of carving a new maze.
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with_all = ["seed", "width", "height", "difficulty"]
    )]
    pub map: Option<PathBuf>,
    /// Write the maze to a `.labmap` file before solving it.
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,
    /// List the valid `.labmap` files of a directory and exit.
    #[arg(long, value_name = "DIR")]
    pub list: Option<PathBuf>,
    /// Stop after this many steps even if the search is not finished.
    #[arg(long, value_name = "N")]
    pub max_steps: Option<usize>,
    /// Print the search state every N steps.
    #[arg(long, value_name = "N")]
    pub trace_every: Option<NonZeroUsize>,
    /// Increase log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Config {
    /// Requested maze size: the preset, overridden side by side by `--width` and `--height`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        let (width, height) = self.difficulty.dimensions();
        (self.width.unwrap_or(width), self.height.unwrap_or(height))
    }

    /// Log level selected by the verbosity flags, warnings by default.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
