//! Passive presentation helpers.
//!
//! Nothing here touches search state. A display layer asks which category each cell falls in and
//! draws it however it likes; [`render`] is the plain-text drawing used by the command line.

use std::collections::BTreeSet;

use crate::{
    pathfinding::Pathfinder,
    types::{Cell, Position},
};

/// What a cell should look like at a given moment of the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "Display layers import the variants by name, where a bare `View` reads as a widget."
)]
pub enum CellView {
    /// Impassable cell.
    Wall,
    /// Passage the search has not reached.
    Open,
    /// Start cell.
    Start,
    /// Goal cell.
    Goal,
    /// Discovered but not expanded yet.
    Frontier,
    /// Already expanded.
    Closed,
    /// Part of the result path.
    Path,
}

impl CellView {
    /// Single character used by [`render`].
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => ' ',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Frontier => 'o',
            Self::Closed => '.',
            Self::Path => '*',
        }
    }
}

/// Classifies one cell, or returns `None` outside the grid.
///
/// Precedence, highest first: the search endpoints, the result path, the closed set, the frontier,
/// and finally the bare grid cell.
#[must_use]
pub fn classify(pathfinder: &Pathfinder<'_>, position: Position) -> Option<CellView> {
    let cell = pathfinder.grid().get(position)?;
    Some(classify_with(
        pathfinder,
        &path_set(pathfinder),
        position,
        cell,
    ))
}

/// Draws the whole grid, one line per row, with the glyphs of [`CellView`].
///
/// This function classifies every cell the same way [`classify`] does, but collects the result
/// path only once for the whole drawing. Each row ends with a newline, the last one included.
#[must_use]
pub fn render(pathfinder: &Pathfinder<'_>) -> String {
    let grid = pathfinder.grid();
    let on_path = path_set(pathfinder);
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());

    for (y, row) in grid.rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let view = classify_with(pathfinder, &on_path, Position::new(x, y), cell);
            out.push(view.glyph());
        }
        out.push('\n');
    }

    out
}

/// Positions of the result path, for repeated membership checks.
fn path_set(pathfinder: &Pathfinder<'_>) -> BTreeSet<Position> {
    pathfinder.path().iter().copied().collect()
}

/// Classification shared by [`classify`] and [`render`].
fn classify_with(
    pathfinder: &Pathfinder<'_>,
    on_path: &BTreeSet<Position>,
    position: Position,
    cell: Cell,
) -> CellView {
    if position == pathfinder.start() {
        CellView::Start
    } else if position == pathfinder.goal() {
        CellView::Goal
    } else if on_path.contains(&position) {
        CellView::Path
    } else if pathfinder.is_closed(position) {
        CellView::Closed
    } else if pathfinder.is_open(position) {
        CellView::Frontier
    } else {
        match cell {
            Cell::Wall => CellView::Wall,
            Cell::Open | Cell::Start | Cell::Goal => CellView::Open,
        }
    }
}
