//! Maze generation module.
//!
//! This module carves perfect mazes with the randomized depth-first "recursive backtracker". The
//! passages of a carved maze form a spanning tree over the odd-coordinate cells, so there is exactly
//! one simple path between any two open cells.

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom as _, Rng, SeedableRng as _};

use crate::{
    error::MazeError,
    grid::{Grid, MIN_SIDE},
    types::{Cell, Position},
};

/// Jumps to the candidate cells two steps away, in the order they are considered.
const CARVE_DIRECTIONS: [(isize, isize); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];

/// Rounds an even side length down to the next odd one.
///
/// The carve only visits odd coordinates, so an even side would leave a second wall line along
/// the far border and strand the goal on an even coordinate.
#[must_use]
pub const fn round_to_odd(side: usize) -> usize {
    if side % 2 == 0 {
        side.saturating_sub(1)
    } else {
        side
    }
}

/// Carves a maze with a freshly seeded random source.
///
/// The generator owns its own [`StdRng`], so the same seed always yields the same grid no matter
/// what other randomness the program draws.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_seeded(width: usize, height: usize, seed: u64) -> Result<Grid, MazeError> {
    debug!("carving a {width}x{height} maze from seed {seed}");
    generate(width, height, &mut seeded_rng(seed))
}

/// Random source dedicated to carving.
fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Carves a perfect maze of the given size.
///
/// Even sides are rounded down to the next odd number first and the returned grid has the rounded
/// size. The start is placed at `(1, 1)` and the goal at `(width - 2, height - 2)`. The random source
/// is threaded through the whole carve and never reseeded.
///
/// # Errors
///
/// Returns [`MazeError::InvalidDimensions`] when a rounded side is below 3, when both rounded
/// sides equal 3 (start and goal would share the only open cell), or when the cell count does not
/// fit in memory addressing.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let carved_width = round_to_odd(width);
    let carved_height = round_to_odd(height);

    if carved_width < MIN_SIDE
        || carved_height < MIN_SIDE
        || (carved_width == MIN_SIDE && carved_height == MIN_SIDE)
    {
        return Err(MazeError::InvalidDimensions { width, height });
    }

    let addressable = carved_width
        .checked_mul(carved_height)
        .is_some_and(|cells| cells <= isize::MAX.unsigned_abs());
    if !addressable {
        return Err(MazeError::InvalidDimensions { width, height });
    }

    let start = Position::new(1, 1);
    let goal = Position::new(carved_width - 2, carved_height - 2);
    let mut grid = Grid::walled(carved_width, carved_height, start, goal);

    let passages = carve(&mut grid, start, rng);
    debug!("carved {passages} passages into a {carved_width}x{carved_height} grid");

    grid.set(start, Cell::Start);
    grid.set(goal, Cell::Goal);

    Ok(grid)
}

/// Runs the backtracker from `origin`, returning how many passages were opened.
///
/// Each passage opens two cells: the candidate and the wall between it and the current cell.
fn carve<R: Rng + ?Sized>(grid: &mut Grid, origin: Position, rng: &mut R) -> usize {
    let mut stack = vec![origin];
    let mut candidates = Vec::with_capacity(CARVE_DIRECTIONS.len());
    let mut passages = 0;

    grid.set(origin, Cell::Open);

    while let Some(&current) = stack.last() {
        candidates.clear();
        candidates.extend(
            CARVE_DIRECTIONS
                .iter()
                .filter_map(|&(dx, dy)| current.offset(dx, dy))
                .filter(|&candidate| is_carvable(grid, candidate)),
        );

        let Some(&next) = candidates.choose(&mut *rng) else {
            let _ = stack.pop();
            continue;
        };

        let between = Position::new((current.x + next.x) / 2, (current.y + next.y) / 2);
        grid.set(between, Cell::Open);
        grid.set(next, Cell::Open);
        stack.push(next);
        passages += 1;
    }

    passages
}

/// Whether a candidate lies strictly inside the border and is still solid.
fn is_carvable(grid: &Grid, candidate: Position) -> bool {
    candidate.x > 0
        && candidate.y > 0
        && candidate.x < grid.width() - 1
        && candidate.y < grid.height() - 1
        && grid.get(candidate) == Some(Cell::Wall)
}
