//! Grid storage module.
//!
//! This module contains the [`Grid`] struct holding the cell states of a maze, the neighbourhood
//! queries the pathfinder relies on, and the `.labmap` text format used to store grids on disk.

use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use crate::{
    error::MazeError,
    types::{Cell, Position},
};

/// Offsets of the four axis neighbours, in the order they are reported: down, right, up, left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Smallest side length a grid may have.
pub const MIN_SIDE: usize = 3;

/// Two-dimensional array of cells with a single start and a single goal.
///
/// A grid is read-only once built. Generated grids come out of
/// [`generate`](crate::generator::generate); stored ones are parsed from the `.labmap` format
/// through [`FromStr`]. Any number of pathfinders may borrow the same grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Row-major cell states.
    cells: Vec<Cell>,
    /// Location of the only [`Cell::Start`].
    start: Position,
    /// Location of the only [`Cell::Goal`].
    goal: Position,
}

impl Grid {
    /// Builds a grid made entirely of walls, with the endpoints recorded but not yet painted.
    ///
    /// The caller is responsible for painting [`Cell::Start`] and [`Cell::Goal`] at the given
    /// positions before handing the grid out.
    pub(crate) fn walled(width: usize, height: usize, start: Position, goal: Position) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
            start,
            goal,
        }
    }

    /// Overwrites a single cell; out-of-bounds positions are ignored.
    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        if let Some(slot) = self
            .index(position)
            .and_then(|index| self.cells.get_mut(index))
        {
            *slot = cell;
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Position of the start cell.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Position of the goal cell.
    #[must_use]
    pub const fn goal(&self) -> Position {
        self.goal
    }

    /// Whether the position lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Row-major index of a position, if it lies inside the grid.
    const fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.y * self.width + position.x)
        } else {
            None
        }
    }

    /// State of the cell at `position`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Whether `position` is inside the grid and not a wall.
    #[must_use]
    pub fn is_passable(&self, position: Position) -> bool {
        self.get(position).is_some_and(Cell::is_passable)
    }

    /// Passable axis neighbours of `position`, in the order down, right, up, left.
    pub fn neighbours(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dx, dy)| position.offset(dx, dy))
            .filter(move |&neighbour| self.is_passable(neighbour))
    }

    /// Every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Number of non-wall cells, endpoints included.
    #[must_use]
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_passable()).count()
    }
}

/// Returns the single position in `found`, or an error naming how many `cell`s were seen.
fn single(found: &[Position], cell: Cell) -> Result<Position, MazeError> {
    match found {
        [position] => Ok(*position),
        _ => Err(MazeError::EndpointCount {
            cell,
            count: found.len(),
        }),
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    /// Parses a grid from the `.labmap` format.
    ///
    /// Each line is a row and each character a cell: `1` start, `2` wall, `3` open, `4` goal.
    /// Leading and trailing blank space around the whole map is ignored. The map must be at least
    /// 3 by 3, rectangular, and hold exactly one start and one goal. Connectivity is not checked.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = input.trim().lines().collect();
        let height = lines.len();
        let width = lines.first().map_or(0, |line| line.chars().count());

        if height < MIN_SIDE || width < MIN_SIDE {
            return Err(MazeError::MapTooSmall { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut starts = Vec::new();
        let mut goals = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, character) in line.chars().enumerate() {
                let cell = Cell::from_digit(character).ok_or(MazeError::InvalidCharacter {
                    x,
                    y,
                    found: character,
                })?;
                match cell {
                    Cell::Start => starts.push(Position::new(x, y)),
                    Cell::Goal => goals.push(Position::new(x, y)),
                    Cell::Wall | Cell::Open => {}
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
            start: single(&starts, Cell::Start)?,
            goal: single(&goals, Cell::Goal)?,
        })
    }
}

impl fmt::Display for Grid {
    /// Writes the grid in the `.labmap` format, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_char(cell.digit())?;
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}
