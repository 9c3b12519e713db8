//! Incremental pathfinding module.
//!
//! This module contains the step-wise A* search. The caller drives the search one node expansion
//! at a time through [`Pathfinder::step`] and may read the frontier, the closed set, the result path
//! and the running statistics between any two calls.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet, BinaryHeap},
    fmt,
    time::{Duration, Instant},
};

use log::{debug, trace};

use crate::{
    error::MazeError,
    grid::Grid,
    types::{Position, SearchStatus},
};

/// Expansion candidate recorded by the search.
///
/// Nodes are never modified once created. When a cheaper route to a position is found, a new node
/// supersedes the old one in the best-known table and the old frontier entry goes stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SearchNode {
    /// Cell this node stands for.
    position: Position,
    /// Cost of the route from the start.
    g: usize,
    /// Manhattan estimate of the remaining cost.
    h: usize,
    /// Arena index of the node this one was reached from; `None` for the start node.
    parent: Option<usize>,
}

impl SearchNode {
    /// Total priority of the node.
    const fn f(&self) -> usize {
        self.g + self.h
    }
}

/// Frontier entry pairing a node with its arena index and insertion sequence number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FrontierEntry {
    /// The node waiting for expansion.
    node: SearchNode,
    /// Index of the node in the arena, used as parent link by its successors.
    index: usize,
    /// Insertion order, unique per entry.
    sequence: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys so the max-heap pops the lowest f first, and among equal f the
        // entry pushed earliest.
        other
            .node
            .f()
            .cmp(&self.node.f())
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Running figures of a search.
///
/// Every field is zero until the first call to [`Pathfinder::step`]. The path length and the
/// efficiency are only filled in once the goal has been reached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Statistics {
    /// Number of positions in the closed set.
    pub closed_count: usize,
    /// Number of entries in the frontier, stale ones included.
    pub frontier_count: usize,
    /// Number of edges on the result path.
    pub path_length: usize,
    /// Wall-clock time since the search was seeded.
    pub elapsed: Duration,
    /// Path length relative to the number of expanded positions, as a percentage.
    pub efficiency_percent: f64,
}

impl Statistics {
    /// Elapsed time in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded {} | frontier {} | path {} | {:.6}s | efficiency {:.1}%",
            self.closed_count,
            self.frontier_count,
            self.path_length,
            self.elapsed_seconds(),
            self.efficiency_percent
        )
    }
}

/// Owned copy of everything a display layer may want to show about a search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchSnapshot {
    /// Lifecycle state at the time of the snapshot.
    pub status: SearchStatus,
    /// Discovered positions that have not been expanded yet, in ascending order.
    pub open: Vec<Position>,
    /// Expanded positions, in ascending order.
    pub closed: Vec<Position>,
    /// Result path from start to goal; empty unless solved.
    pub path: Vec<Position>,
    /// Running figures.
    pub statistics: Statistics,
}

/// Step-wise A* search over a borrowed grid.
///
/// The search is seeded lazily by the first call to [`step`](Self::step). Each call afterwards
/// performs at most one node expansion. The grid is only ever read, so several pathfinders may
/// share it.
#[derive(Debug)]
pub struct Pathfinder<'grid> {
    /// Grid being searched.
    grid: &'grid Grid,
    /// Where the search begins.
    start: Position,
    /// Where the search is heading.
    goal: Position,
    /// Lifecycle state, dispatched on by every step.
    status: SearchStatus,
    /// Append-only arena of every node created.
    nodes: Vec<SearchNode>,
    /// Nodes waiting for expansion, lowest priority first.
    frontier: BinaryHeap<FrontierEntry>,
    /// Arena index of the cheapest node known for each discovered position.
    best: BTreeMap<Position, usize>,
    /// Positions already expanded.
    closed: BTreeSet<Position>,
    /// Result path, filled in on success.
    path: Vec<Position>,
    /// Next insertion sequence number for the frontier.
    sequence: u64,
    /// When the search was seeded.
    started_at: Option<Instant>,
    /// Running figures.
    statistics: Statistics,
}

impl<'grid> Pathfinder<'grid> {
    /// Creates a search between two arbitrary passable cells of `grid`.
    ///
    /// This function only validates the endpoints. Nothing is explored until the first
    /// [`step`](Self::step).
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidEndpoint`] when either endpoint lies outside the grid or on a
    /// wall.
    pub fn new(grid: &'grid Grid, start: Position, goal: Position) -> Result<Self, MazeError> {
        for position in [start, goal] {
            if !grid.is_passable(position) {
                return Err(MazeError::InvalidEndpoint { position });
            }
        }

        Ok(Self::between(grid, start, goal))
    }

    /// Creates a search from the grid's own start cell to its own goal cell.
    #[must_use]
    pub fn for_grid(grid: &'grid Grid) -> Self {
        Self::between(grid, grid.start(), grid.goal())
    }

    /// Builds an unseeded search without validating the endpoints.
    fn between(grid: &'grid Grid, start: Position, goal: Position) -> Self {
        Self {
            grid,
            start,
            goal,
            status: SearchStatus::Uninitialized,
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            best: BTreeMap::new(),
            closed: BTreeSet::new(),
            path: Vec::new(),
            sequence: 0,
            started_at: None,
            statistics: Statistics::default(),
        }
    }

    /// Advances the search by one node expansion.
    ///
    /// This function seeds the frontier with the start node on its first call and expands that
    /// node straight away. Later calls pop the entry with the lowest `f = g + h`, oldest first on
    /// ties. An entry whose position was closed in the meantime is discarded: the call still
    /// counts as a step, but the closed set does not grow and only the counters are refreshed.
    ///
    /// Returns `true` while more work remains. Returns `false` on the call that reaches the goal,
    /// on the call that finds the frontier empty, and on every call after either of those, which
    /// leave the state untouched.
    pub fn step(&mut self) -> bool {
        match self.status {
            SearchStatus::Solved | SearchStatus::Exhausted => false,
            SearchStatus::Uninitialized => {
                self.seed();
                self.expand()
            }
            SearchStatus::Searching => self.expand(),
        }
    }

    /// Steps until the search finishes and returns the final status.
    ///
    /// This function is a no-op on a search that has already finished, so it always returns
    /// [`SearchStatus::Solved`] or [`SearchStatus::Exhausted`].
    pub fn run_to_completion(&mut self) -> SearchStatus {
        while self.step() {}
        self.status
    }

    /// Steps at most `limit` times, returning how many of those calls reported remaining work.
    pub fn run_steps(&mut self, limit: usize) -> usize {
        (0..limit).take_while(|_| self.step()).count()
    }

    /// Throws away all search state so the next step starts over.
    ///
    /// This function keeps the grid and the endpoints. The status goes back to
    /// [`SearchStatus::Uninitialized`] and the statistics back to their defaults.
    pub fn reset(&mut self) {
        self.status = SearchStatus::Uninitialized;
        self.nodes.clear();
        self.frontier.clear();
        self.best.clear();
        self.closed.clear();
        self.path.clear();
        self.sequence = 0;
        self.started_at = None;
        self.statistics = Statistics::default();
    }

    /// Seeds the frontier and the best-known table with the start node.
    fn seed(&mut self) {
        debug!("searching from {} to {}", self.start, self.goal);
        self.started_at = Some(Instant::now());
        self.status = SearchStatus::Searching;
        self.push(SearchNode {
            position: self.start,
            g: 0,
            h: self.start.manhattan(self.goal),
            parent: None,
        });
    }

    /// Records a new node in the arena, the best-known table and the frontier.
    fn push(&mut self, node: SearchNode) {
        let index = self.nodes.len();
        self.nodes.push(node);
        let _ = self.best.insert(node.position, index);
        self.frontier.push(FrontierEntry {
            node,
            index,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Pops the most promising entry and expands it.
    fn expand(&mut self) -> bool {
        let Some(FrontierEntry {
            node: current,
            index,
            ..
        }) = self.frontier.pop()
        else {
            debug!(
                "frontier exhausted after {} expansions without reaching {}",
                self.closed.len(),
                self.goal
            );
            self.finish(SearchStatus::Exhausted);
            return false;
        };

        if !self.closed.insert(current.position) {
            trace!("discarding stale entry for {}", current.position);
            self.refresh_statistics();
            return true;
        }
        trace!(
            "expanding {} with g={} h={}",
            current.position,
            current.g,
            current.h
        );

        if current.position == self.goal {
            self.path = self.trace_back(index);
            self.finish(SearchStatus::Solved);
            debug!(
                "reached {} in {} expansions: {}",
                self.goal,
                self.closed.len(),
                self.statistics
            );
            return false;
        }

        let grid = self.grid;
        let g = current.g + 1;
        for neighbour in grid.neighbours(current.position) {
            if self.closed.contains(&neighbour) {
                continue;
            }

            let improves = self
                .best
                .get(&neighbour)
                .and_then(|&known| self.nodes.get(known))
                .map_or(true, |known| g < known.g);
            if improves {
                self.push(SearchNode {
                    position: neighbour,
                    g,
                    h: neighbour.manhattan(self.goal),
                    parent: Some(index),
                });
            }
        }

        self.refresh_statistics();
        true
    }

    /// Walks parent links from the node at `index` back to the start.
    fn trace_back(&self, index: usize) -> Vec<Position> {
        let mut path = Vec::new();
        let mut cursor = Some(index);

        while let Some(node) = cursor.and_then(|index| self.nodes.get(index)) {
            path.push(node.position);
            cursor = node.parent;
        }

        path.reverse();
        path
    }

    /// Updates the counters that change on every expansion.
    fn refresh_statistics(&mut self) {
        self.statistics.closed_count = self.closed.len();
        self.statistics.frontier_count = self.frontier.len();
        self.statistics.elapsed = self
            .started_at
            .map_or(Duration::ZERO, |started| started.elapsed());
    }

    /// Moves to a terminal state and computes the final figures.
    fn finish(&mut self, status: SearchStatus) {
        self.status = status;
        self.refresh_statistics();

        let path_length = self.path.len().saturating_sub(1);
        self.statistics.path_length = path_length;
        self.statistics.efficiency_percent = if self.closed.is_empty() {
            0.0
        } else {
            path_length as f64 / self.closed.len() as f64 * 100.0
        };
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    /// Grid being searched.
    #[must_use]
    pub const fn grid(&self) -> &'grid Grid {
        self.grid
    }

    /// Where the search begins.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Where the search is heading.
    #[must_use]
    pub const fn goal(&self) -> Position {
        self.goal
    }

    /// Discovered positions not expanded yet, in ascending order.
    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.best
            .keys()
            .copied()
            .filter(|position| !self.closed.contains(position))
    }

    /// Expanded positions, in ascending order.
    pub fn closed_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.closed.iter().copied()
    }

    /// Whether `position` has been discovered but not expanded.
    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        self.best.contains_key(&position) && !self.closed.contains(&position)
    }

    /// Whether `position` has been expanded.
    #[must_use]
    pub fn is_closed(&self, position: Position) -> bool {
        self.closed.contains(&position)
    }

    /// Cheapest known cost from the start to `position`, if it has been discovered.
    #[must_use]
    pub fn best_cost(&self, position: Position) -> Option<usize> {
        self.best
            .get(&position)
            .and_then(|&index| self.nodes.get(index))
            .map(|node| node.g)
    }

    /// Result path from start to goal, empty unless the search is solved.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Running figures.
    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.statistics
    }

    /// Owned copy of the whole observable state.
    #[must_use]
    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            status: self.status,
            open: self.open_positions().collect(),
            closed: self.closed_positions().collect(),
            path: self.path.clone(),
            statistics: self.statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::generator::generate_seeded;

    /// Two walls force a single route from (1, 1) to (3, 3).
    const DETOUR_MAP: &str = "\
22222
21332
23232
22342
22222";

    /// The goal sits in a pocket of its own.
    const SEALED_MAP: &str = "\
22222
21322
22222
23422
22222";

    /// A room without inner walls, so the search meets many equal priorities and loops.
    const ROOM_MAP: &str = "\
222222222
213333332
233333332
233333332
233333332
233333342
222222222";

    /// The lower corridor reaches (4, 2) first, so (4, 1) is discovered at cost 5 before the upper
    /// corridor finds it at cost 3 and leaves the first entry behind in the frontier.
    const RELAXATION_MAP: &str = "\
2222222222
2333333332
2312323232
2233322432
2222222222";

    /// Parses one of the maps above.
    fn grid(map: &str) -> Grid {
        map.parse().expect("test map should parse")
    }

    /// Length in edges of a shortest route, found by breadth-first search.
    fn bfs_distance(grid: &Grid, from: Position, to: Position) -> Option<usize> {
        let mut distances = BTreeMap::from([(from, 0_usize)]);
        let mut queue = VecDeque::from([from]);

        while let Some(current) = queue.pop_front() {
            let distance = *distances.get(&current)?;
            if current == to {
                return Some(distance);
            }
            for neighbour in grid.neighbours(current) {
                if !distances.contains_key(&neighbour) {
                    let _ = distances.insert(neighbour, distance + 1);
                    queue.push_back(neighbour);
                }
            }
        }

        None
    }

    /// Whether consecutive positions of `path` are axis neighbours.
    fn is_contiguous(path: &[Position]) -> bool {
        path.windows(2).all(|pair| match pair {
            [first, second] => first.manhattan(*second) == 1,
            _ => false,
        })
    }

    #[test]
    fn test_zero_steps_reports_nothing() {
        let grid = grid(DETOUR_MAP);
        let pathfinder = Pathfinder::for_grid(&grid);

        assert_eq!(pathfinder.status(), SearchStatus::Uninitialized);
        assert_eq!(pathfinder.statistics(), Statistics::default());
        assert!(pathfinder.path().is_empty());
        assert_eq!(pathfinder.open_positions().count(), 0);
        assert_eq!(pathfinder.closed_positions().count(), 0);
        assert_eq!(pathfinder.snapshot(), SearchSnapshot::default());
    }

    #[test]
    fn test_first_step_expands_start() {
        let grid = grid(DETOUR_MAP);
        let mut pathfinder = Pathfinder::for_grid(&grid);

        assert!(pathfinder.step());
        assert_eq!(pathfinder.status(), SearchStatus::Searching);
        assert!(pathfinder.is_closed(Position::new(1, 1)));
        assert_eq!(
            pathfinder.open_positions().collect::<Vec<_>>(),
            vec![Position::new(1, 2), Position::new(2, 1)]
        );
        assert_eq!(pathfinder.best_cost(Position::new(2, 1)), Some(1));
        assert_eq!(pathfinder.statistics().closed_count, 1);
        assert_eq!(pathfinder.statistics().frontier_count, 2);
    }

    #[test]
    fn test_forced_detour() {
        let grid = grid(DETOUR_MAP);
        let mut pathfinder = Pathfinder::for_grid(&grid);

        assert_eq!(pathfinder.run_steps(10), 5);
        assert_eq!(pathfinder.status(), SearchStatus::Solved);
        assert_eq!(
            pathfinder.path(),
            &[
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(3, 1),
                Position::new(3, 2),
                Position::new(3, 3),
            ]
        );

        // The dead end at (1, 2) ties with the real route and is expanded first; (2, 3) is never
        // discovered.
        let statistics = pathfinder.statistics();
        assert_eq!(statistics.path_length, 4);
        assert_eq!(statistics.closed_count, 6);
        assert_eq!(statistics.frontier_count, 0);
        assert!(pathfinder.is_closed(Position::new(1, 2)));
        assert!(!pathfinder.is_open(Position::new(2, 3)));
        assert!((statistics.efficiency_percent - 400.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_cheaper_route_supersedes_stale_entry() {
        let grid = grid(RELAXATION_MAP);
        let mut pathfinder = Pathfinder::for_grid(&grid);
        let relaxed = Position::new(4, 1);

        assert_eq!(pathfinder.run_steps(7), 7);
        assert_eq!(pathfinder.best_cost(relaxed), Some(5));
        assert!(pathfinder.step());
        assert_eq!(pathfinder.best_cost(relaxed), Some(3));

        assert_eq!(pathfinder.run_steps(6), 6);
        let before = pathfinder.statistics();
        assert_eq!((before.closed_count, before.frontier_count), (14, 2));

        assert!(pathfinder.step());
        let after = pathfinder.statistics();
        assert_eq!(after.closed_count, before.closed_count);
        assert_eq!(after.frontier_count, 1);
        assert_eq!(pathfinder.status(), SearchStatus::Searching);

        assert_eq!(pathfinder.run_to_completion(), SearchStatus::Solved);
        assert_eq!(pathfinder.statistics().closed_count, 18);
        assert_eq!(
            Some(pathfinder.statistics().path_length),
            bfs_distance(&grid, grid.start(), grid.goal())
        );
        let upper_route = [
            (2, 2),
            (2, 1),
            (3, 1),
            (4, 1),
            (5, 1),
            (6, 1),
            (7, 1),
            (8, 1),
            (8, 2),
            (8, 3),
            (7, 3),
        ]
        .map(Position::from);
        assert_eq!(pathfinder.path(), upper_route.as_slice());
    }

    #[test]
    fn test_termination_is_idempotent() {
        let grid = grid(DETOUR_MAP);
        let mut pathfinder = Pathfinder::for_grid(&grid);

        assert_eq!(pathfinder.run_to_completion(), SearchStatus::Solved);
        let finished = pathfinder.snapshot();

        for _ in 0..3 {
            assert!(!pathfinder.step());
        }
        assert_eq!(pathfinder.snapshot(), finished);
    }

    #[test]
    fn test_unreachable_goal_exhausts() {
        let grid = grid(SEALED_MAP);
        let mut pathfinder = Pathfinder::for_grid(&grid);

        assert!(pathfinder.step());
        assert!(pathfinder.step());
        assert!(!pathfinder.step());
        assert!(!pathfinder.step());

        assert_eq!(pathfinder.status(), SearchStatus::Exhausted);
        assert_ne!(pathfinder.status(), SearchStatus::Uninitialized);
        assert!(pathfinder.path().is_empty());
        assert_eq!(pathfinder.statistics().closed_count, 2);
        assert_eq!(pathfinder.statistics().path_length, 0);
        assert!(pathfinder.statistics().efficiency_percent.abs() < f64::EPSILON);
    }

    #[test]
    fn test_matches_breadth_first_distance() {
        for seed in 0..25 {
            let grid = generate_seeded(21, 15, seed).expect("maze should carve");
            let mut pathfinder = Pathfinder::for_grid(&grid);

            assert_eq!(pathfinder.run_to_completion(), SearchStatus::Solved);
            let expected = bfs_distance(&grid, grid.start(), grid.goal());
            assert_eq!(Some(pathfinder.statistics().path_length), expected, "seed {seed}");

            let path = pathfinder.path();
            assert_eq!(path.first(), Some(&grid.start()));
            assert_eq!(path.last(), Some(&grid.goal()));
            assert!(is_contiguous(path), "seed {seed}: path jumps");
            assert!(path.iter().all(|&position| grid.is_passable(position)));
        }
    }

    #[test]
    fn test_optimal_in_open_room() {
        let grid = grid(ROOM_MAP);
        let mut pathfinder = Pathfinder::for_grid(&grid);

        assert_eq!(pathfinder.run_to_completion(), SearchStatus::Solved);
        assert_eq!(
            pathfinder.statistics().path_length,
            grid.start().manhattan(grid.goal())
        );
        assert!(is_contiguous(pathfinder.path()));
    }

    #[test]
    fn test_closed_set_only_grows() {
        let grid = grid(ROOM_MAP);
        let mut pathfinder = Pathfinder::for_grid(&grid);
        let mut previous: BTreeSet<Position> = BTreeSet::new();

        loop {
            let running = pathfinder.step();
            let current: BTreeSet<Position> = pathfinder.closed_positions().collect();

            assert!(current.is_superset(&previous));
            assert!(current.len() <= previous.len() + 1);
            previous = current;

            if !running {
                break;
            }
        }

        assert_eq!(previous.len(), pathfinder.statistics().closed_count);
    }

    #[test]
    fn test_open_and_closed_are_disjoint() {
        let grid = generate_seeded(15, 15, 4).expect("maze should carve");
        let mut pathfinder = Pathfinder::for_grid(&grid);

        while pathfinder.step() {
            let snapshot = pathfinder.snapshot();
            assert!(snapshot
                .open
                .iter()
                .all(|position| !snapshot.closed.contains(position)));
        }
    }

    #[test]
    fn test_reset_starts_over() {
        let grid = generate_seeded(17, 11, 21).expect("maze should carve");
        let mut pathfinder = Pathfinder::for_grid(&grid);

        assert_eq!(pathfinder.run_to_completion(), SearchStatus::Solved);
        let first_path = pathfinder.path().to_vec();

        pathfinder.reset();
        assert_eq!(pathfinder.status(), SearchStatus::Uninitialized);
        assert_eq!(pathfinder.statistics(), Statistics::default());
        assert!(pathfinder.path().is_empty());
        assert_eq!(pathfinder.closed_positions().count(), 0);

        assert_eq!(pathfinder.run_to_completion(), SearchStatus::Solved);
        assert_eq!(pathfinder.path(), first_path.as_slice());
    }

    #[test]
    fn test_endpoints_are_validated() {
        let grid = grid(DETOUR_MAP);

        assert_eq!(
            Pathfinder::new(&grid, Position::new(0, 0), grid.goal()).map(|_| ()),
            Err(MazeError::InvalidEndpoint {
                position: Position::new(0, 0)
            })
        );
        assert_eq!(
            Pathfinder::new(&grid, grid.start(), Position::new(8, 1)).map(|_| ()),
            Err(MazeError::InvalidEndpoint {
                position: Position::new(8, 1)
            })
        );
        assert!(Pathfinder::new(&grid, Position::new(1, 2), Position::new(2, 3)).is_ok());
    }

    #[test]
    fn test_custom_endpoints() {
        let grid = grid(DETOUR_MAP);
        let mut pathfinder = Pathfinder::new(&grid, Position::new(3, 1), Position::new(2, 3))
            .expect("endpoints are open");

        assert_eq!(pathfinder.run_to_completion(), SearchStatus::Solved);
        assert_eq!(pathfinder.statistics().path_length, 3);
        assert_eq!(pathfinder.path().last(), Some(&Position::new(2, 3)));
    }

    #[test]
    fn test_start_equal_to_goal() {
        let grid = grid(DETOUR_MAP);
        let mut pathfinder = Pathfinder::new(&grid, Position::new(3, 1), Position::new(3, 1))
            .expect("endpoint is open");

        assert!(!pathfinder.step());
        assert_eq!(pathfinder.status(), SearchStatus::Solved);
        assert_eq!(pathfinder.path(), &[Position::new(3, 1)]);
        assert_eq!(pathfinder.statistics().path_length, 0);
    }

    #[test]
    fn test_pathfinders_share_a_grid() {
        let grid = generate_seeded(13, 13, 2).expect("maze should carve");
        let mut first = Pathfinder::for_grid(&grid);
        let mut second = Pathfinder::for_grid(&grid);

        let _ = first.run_steps(3);
        assert_eq!(second.status(), SearchStatus::Uninitialized);

        assert_eq!(first.run_to_completion(), SearchStatus::Solved);
        assert_eq!(second.run_to_completion(), SearchStatus::Solved);
        assert_eq!(first.path(), second.path());
    }

    #[test]
    fn test_frontier_prefers_lower_priority_then_age() {
        let node = |g, h| SearchNode {
            position: Position::new(g, h),
            g,
            h,
            parent: None,
        };
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry {
            node: node(4, 4),
            index: 0,
            sequence: 0,
        });
        heap.push(FrontierEntry {
            node: node(1, 5),
            index: 1,
            sequence: 2,
        });
        heap.push(FrontierEntry {
            node: node(3, 3),
            index: 2,
            sequence: 1,
        });

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|entry| entry.index)).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_statistics_display() {
        let statistics = Statistics {
            closed_count: 6,
            frontier_count: 0,
            path_length: 4,
            elapsed: Duration::from_millis(1500),
            efficiency_percent: 400.0 / 6.0,
        };

        assert_eq!(
            statistics.to_string(),
            "expanded 6 | frontier 0 | path 4 | 1.500000s | efficiency 66.7%"
        );
    }
}
