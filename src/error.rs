//! Error type for maze construction and search setup.

use thiserror::Error;

use crate::types::{Cell, Position};

/// Errors raised while building a grid or a pathfinder over it.
///
/// Every variant is detected at construction time; once a grid and a pathfinder exist, stepping the
/// search cannot fail.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "A bare `Error` would shadow the trait wherever the type is imported."
)]
pub enum MazeError {
    /// The requested maze cannot hold a start and a distinct goal, or is too large to allocate.
    #[error(
        "cannot carve a {width}x{height} maze: sides must be at least 3, not both 3, and small \
         enough to allocate"
    )]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A map has fewer than three rows or columns.
    #[error("map is {width}x{height}, it needs at least 3 rows and 3 columns")]
    MapTooSmall {
        /// Width of the first row.
        width: usize,
        /// Number of rows.
        height: usize,
    },
    /// A map row differs in length from the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A map contains something other than the digits 1 to 4.
    #[error("unexpected character {found:?} at ({x}, {y})")]
    InvalidCharacter {
        /// Column of the character.
        x: usize,
        /// Row of the character.
        y: usize,
        /// The character itself.
        found: char,
    },
    /// A map does not hold exactly one start or exactly one goal.
    #[error("map must contain exactly one {cell} cell, found {count}")]
    EndpointCount {
        /// The cell kind that was miscounted.
        cell: Cell,
        /// How many were found.
        count: usize,
    },
    /// A search endpoint lies outside the grid or on a wall.
    #[error("search endpoint {position} is outside the grid or inside a wall")]
    InvalidEndpoint {
        /// The rejected endpoint.
        position: Position,
    },
}
