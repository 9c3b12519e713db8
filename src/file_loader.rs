//! File loading and saving utilities for `.labmap` grid files.

use std::{ffi::OsStr, fs, path::Path};

use color_eyre::eyre::{OptionExt as _, Result, WrapErr as _};
use log::{debug, warn};

use crate::grid::Grid;

/// Extension of stored grid files.
pub const MAP_EXTENSION: &str = "labmap";

/// Reads and parses a single `.labmap` file.
///
/// # Errors
///
/// This function may return errors if the file cannot be read or its contents are not a valid grid.
pub fn load_map(path: &Path) -> Result<Grid> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read map file {}", path.display()))?;

    let grid = contents
        .parse::<Grid>()
        .wrap_err_with(|| format!("failed to parse map file {}", path.display()))?;
    debug!(
        "loaded {}x{} map from {}",
        grid.width(),
        grid.height(),
        path.display()
    );

    Ok(grid)
}

/// Writes a grid to disk in the `.labmap` format.
///
/// # Errors
///
/// This function may return errors if the file cannot be written.
pub fn save_map(path: &Path, grid: &Grid) -> Result<()> {
    fs::write(path, grid.to_string())
        .wrap_err_with(|| format!("failed to write map file {}", path.display()))?;
    debug!("saved map to {}", path.display());

    Ok(())
}

/// Scans a directory for `.labmap` files and loads every valid one.
///
/// The maps come back sorted by their key, which is the file name without the extension. Files that
/// fail to parse are skipped with a warning so one broken map does not hide the others.
///
/// # Errors
///
/// This function may return errors if the directory cannot be listed or a file name is not valid
/// Unicode.
pub fn fetch_maps(dir: &Path) -> Result<Vec<(String, Grid)>> {
    let mut maps = Vec::new();

    for entry in fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to list map directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir() || path.extension().and_then(OsStr::to_str) != Some(MAP_EXTENSION) {
            continue;
        }

        let key = path
            .file_stem()
            .and_then(OsStr::to_str)
            .ok_or_eyre("failed to convert map file name to a string slice")?
            .to_owned();

        match load_map(&path) {
            Ok(grid) => maps.push((key, grid)),
            Err(err) => warn!("skipping {}: {err:#}", path.display()),
        }
    }

    maps.sort_by(|(first, _), (second, _)| first.cmp(second));
    Ok(maps)
}
