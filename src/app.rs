//! Driver that ties the maze generator, the pathfinder and the command line together.

use std::io::Write;

use color_eyre::eyre::{Result, WrapErr as _};
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;

use crate::{
    config::Config,
    file_loader,
    generator,
    grid::Grid,
    pathfinding::Pathfinder,
    types::SearchStatus,
    view,
};

/// Installs the stderr logger at the given level.
///
/// # Errors
///
/// This function returns an error if a logger has already been installed.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    SimpleLogger::new()
        .with_level(level)
        .init()
        .wrap_err("failed to install logger")
}

/// Application state container.
///
/// This structure holds the parsed configuration and runs one session against it: either listing
/// stored maps, or building a grid and stepping a search over it until it finishes.
#[derive(Debug)]
pub struct App {
    /// Parsed command-line configuration.
    config: Config,
}

impl App {
    /// Creates the application from a parsed configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the session selected by the configuration and writes its report to `out`.
    ///
    /// This function either lists the stored maps of the `--list` directory, one `key WxH` line per
    /// map, or hands over to [`solve`](Self::solve). The final search status is returned in the
    /// second case; a listing runs no search and yields `None`.
    ///
    /// # Errors
    ///
    /// This function may return errors from map files, maze construction or writing to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Option<SearchStatus>> {
        if let Some(dir) = &self.config.list {
            for (key, grid) in file_loader::fetch_maps(dir)? {
                writeln!(out, "{key} {}x{}", grid.width(), grid.height())?;
            }
            return Ok(None);
        }

        let status = self.solve(out)?;
        info!("session ended with status: {status}");

        Ok(Some(status))
    }

    /// Loads or carves the grid the session will search.
    ///
    /// A stored map wins over generation. Without an explicit seed a random one is drawn from the
    /// thread-local generator and logged, so the maze can be reproduced later.
    ///
    /// # Errors
    ///
    /// This function may return errors if the map file is unusable or the requested size is too
    /// small to carve.
    pub fn build_grid(&self) -> Result<Grid> {
        if let Some(path) = &self.config.map {
            return file_loader::load_map(path);
        }

        let (width, height) = self.config.dimensions();
        let seed = self.config.seed.unwrap_or_else(rand::random);
        info!("carving a {width}x{height} maze with seed {seed}");

        generator::generate_seeded(width, height, seed).wrap_err("failed to carve maze")
    }

    /// Builds the grid, steps the search and writes the final drawing and statistics.
    ///
    /// The search stops early once `--max-steps` calls have been made. With `--trace-every N` the
    /// state is drawn after every N-th step that leaves work remaining.
    ///
    /// # Errors
    ///
    /// This function may return errors from [`build_grid`](Self::build_grid), from saving the map,
    /// or from writing to `out`.
    pub fn solve<W: Write>(&self, out: &mut W) -> Result<SearchStatus> {
        let grid = self.build_grid()?;
        if let Some(path) = &self.config.save {
            file_loader::save_map(path, &grid)?;
        }

        let mut pathfinder = Pathfinder::for_grid(&grid);
        let limit = self.config.max_steps.unwrap_or(usize::MAX);
        let mut steps = 0;

        while steps < limit {
            let running = pathfinder.step();
            steps += 1;

            if !running {
                break;
            }
            if let Some(every) = self.config.trace_every {
                if steps % every.get() == 0 {
                    writeln!(out, "step {steps}: {}", pathfinder.statistics())?;
                    write!(out, "{}", view::render(&pathfinder))?;
                }
            }
        }

        let status = pathfinder.status();
        if !status.is_finished() {
            warn!("stopped after {steps} steps before the search finished");
        }

        write!(out, "{}", view::render(&pathfinder))?;
        writeln!(out, "status: {status} after {steps} steps")?;
        writeln!(out, "{}", pathfinder.statistics())?;

        Ok(status)
    }
}
