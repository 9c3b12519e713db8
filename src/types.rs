//! Type definitions shared by the maze generator, the pathfinder and the driver.

use std::fmt;

use clap::ValueEnum;

/// Integer coordinate of a grid cell.
///
/// This structure is the key for every piece of per-cell search state. The origin is the top-left
/// corner of the grid, `x` grows to the right and `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column of the cell.
    pub x: usize,
    /// Row of the cell.
    pub y: usize,
}

impl Position {
    /// Builds a position from its column and row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two positions.
    ///
    /// This is the heuristic used by the pathfinder. On a 4-connected grid with unit edge costs it
    /// never overestimates the remaining cost and satisfies the triangle inequality across edges.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Offsets the position by a signed amount on each axis.
    ///
    /// Returns `None` when the result would fall below zero on either axis. The upper bound is left
    /// to the grid.
    #[must_use]
    pub const fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };

        Some(Self { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Carved passage.
    Open,
    /// Passage where the search begins.
    Start,
    /// Passage the search is trying to reach.
    Goal,
}

impl Cell {
    /// Whether the search may step onto this cell.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Digit used for this cell in the `.labmap` text format.
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Start => '1',
            Self::Wall => '2',
            Self::Open => '3',
            Self::Goal => '4',
        }
    }

    /// Parses a `.labmap` digit back into a cell.
    #[must_use]
    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Start),
            '2' => Some(Self::Wall),
            '3' => Some(Self::Open),
            '4' => Some(Self::Goal),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wall => "wall",
            Self::Open => "open",
            Self::Start => "start",
            Self::Goal => "goal",
        };
        f.write_str(name)
    }
}

/// Maze size presets.
///
/// The presets keep the sizes offered by the game this solver was built for. They are even on
/// purpose; the generator rounds every even side down to the next odd number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    /// 30 by 20 cells.
    #[default]
    Easy,
    /// 50 by 35 cells.
    Medium,
    /// 70 by 50 cells.
    Hard,
    /// 100 by 70 cells.
    Extreme,
}

impl Difficulty {
    /// Requested `(width, height)` of the preset, before rounding.
    #[must_use]
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            Self::Easy => (30, 20),
            Self::Medium => (50, 35),
            Self::Hard => (70, 50),
            Self::Extreme => (100, 70),
        }
    }
}

/// Lifecycle of an incremental search.
///
/// The pathfinder dispatches on this state in every call to
/// [`step`](crate::pathfinding::Pathfinder::step) instead of probing for internal structures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// No step has been taken since construction or the last reset.
    #[default]
    Uninitialized,
    /// The frontier has been seeded and the goal has not been reached yet.
    Searching,
    /// The goal was expanded and the result path is available.
    Solved,
    /// The frontier ran dry without reaching the goal.
    Exhausted,
}

impl SearchStatus {
    /// Whether the search reached a terminal state.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Uninitialized => "not started",
            Self::Searching => "searching",
            Self::Solved => "solved",
            Self::Exhausted => "no path found",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_is_symmetric() {
        let first = Position::new(1, 7);
        let second = Position::new(4, 2);

        assert_eq!(first.manhattan(second), 8);
        assert_eq!(second.manhattan(first), 8);
        assert_eq!(first.manhattan(first), 0);
    }

    #[test]
    fn test_offset_rejects_negative_coordinates() {
        let origin = Position::new(0, 3);

        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -4), None);
        assert_eq!(origin.offset(2, -3), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 9).to_string(), "(3, 9)");
        assert_eq!(Position::from((5, 1)), Position::new(5, 1));
    }

    #[test]
    fn test_cell_digits_are_distinct() {
        let cells = [Cell::Wall, Cell::Open, Cell::Start, Cell::Goal];

        for cell in cells {
            assert_eq!(Cell::from_digit(cell.digit()), Some(cell));
        }
        assert_eq!(Cell::from_digit('0'), None);
        assert_eq!(Cell::from_digit('x'), None);
    }

    #[test]
    fn test_only_walls_block() {
        assert!(!Cell::Wall.is_passable());
        assert!(Cell::Open.is_passable());
        assert!(Cell::Start.is_passable());
        assert!(Cell::Goal.is_passable());
    }

    #[test]
    fn test_difficulty_dimensions() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.dimensions(), (30, 20));
        assert_eq!(Difficulty::Extreme.dimensions(), (100, 70));
    }

    #[test]
    fn test_search_status_terminal_states() {
        assert!(!SearchStatus::Uninitialized.is_finished());
        assert!(!SearchStatus::Searching.is_finished());
        assert!(SearchStatus::Solved.is_finished());
        assert!(SearchStatus::Exhausted.is_finished());
        assert_eq!(SearchStatus::Exhausted.to_string(), "no path found");
    }
}
