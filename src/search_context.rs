//! Bookkeeping for a single best-first search run and the walk that turns its predecessor map
//! into a path.
use crate::cell::CellRole;
use crate::pathing_grid::Grid;
use crate::UNREACHABLE;
use fxhash::{FxHashMap, FxHashSet};
use grid_util::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct FrontierEntry {
    estimated_cost: u32,
    order: u64,
    point: Point,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.order == other.order
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry: smallest estimate first, then the earliest insertion
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.order.cmp(&self.order),
            s => s,
        }
    }
}

/// Scores, predecessors and frontier of one search. Created per call and dropped afterwards.
pub(crate) struct SearchState {
    g_score: FxHashMap<Point, u32>,
    f_score: FxHashMap<Point, u32>,
    pub(crate) came_from: FxHashMap<Point, Point>,
    frontier: BinaryHeap<FrontierEntry>,
    frontier_membership: FxHashSet<Point>,
    closed: FxHashSet<Point>,
    counter: u64,
}

impl SearchState {
    pub(crate) fn new(start: Point, start_estimate: u32) -> SearchState {
        let mut state = SearchState {
            g_score: FxHashMap::default(),
            f_score: FxHashMap::default(),
            came_from: FxHashMap::default(),
            frontier: BinaryHeap::new(),
            frontier_membership: FxHashSet::default(),
            closed: FxHashSet::default(),
            counter: 0,
        };
        state.g_score.insert(start, 0);
        state.f_score.insert(start, start_estimate);
        state.push(start, start_estimate);
        state
    }

    pub(crate) fn g(&self, point: &Point) -> u32 {
        self.g_score.get(point).copied().unwrap_or(UNREACHABLE)
    }

    pub(crate) fn f(&self, point: &Point) -> u32 {
        self.f_score.get(point).copied().unwrap_or(UNREACHABLE)
    }

    pub(crate) fn is_closed(&self, point: &Point) -> bool {
        self.closed.contains(point)
    }

    fn push(&mut self, point: Point, estimated_cost: u32) {
        self.frontier.push(FrontierEntry {
            estimated_cost,
            order: self.counter,
            point,
        });
        self.counter += 1;
        self.frontier_membership.insert(point);
    }

    /// Pops the cell with the smallest estimate, settling it for the rest of the run.
    pub(crate) fn pop(&mut self) -> Option<Point> {
        let FrontierEntry { point, .. } = self.frontier.pop()?;
        self.frontier_membership.remove(&point);
        self.closed.insert(point);
        Some(point)
    }

    /// Records `parent` as the best known predecessor of `point` with the given scores, which must
    /// improve on the current ones. A cell already on the frontier keeps the priority it was
    /// pushed with. Returns [true] if `point` was not yet on the frontier.
    pub(crate) fn relax(&mut self, parent: Point, point: Point, cost: u32, estimated_cost: u32) -> bool {
        debug_assert!(cost < self.g(&point));
        self.came_from.insert(point, parent);
        self.g_score.insert(point, cost);
        self.f_score.insert(point, estimated_cost);
        if self.frontier_membership.contains(&point) {
            return false;
        }
        self.push(point, estimated_cost);
        true
    }

    pub(crate) fn frontier_len(&self) -> usize {
        self.frontier_membership.len()
    }
}

/// Walks the predecessor map back from `end` until a cell without predecessor (the start) is
/// reached and returns the visited cells in end-to-start order, both endpoints included. Every
/// cell strictly between the endpoints is marked [CellRole::Path]; `on_step` runs after each step.
pub fn reconstruct_path<F>(
    came_from: &FxHashMap<Point, Point>,
    end: Point,
    grid: &mut Grid,
    mut on_step: F,
) -> Vec<Point>
where
    F: FnMut(&Grid),
{
    let mut path = vec![end];
    let mut current = end;
    while let Some(&previous) = came_from.get(&current) {
        if came_from.contains_key(&previous) {
            grid.mark(previous, CellRole::Path);
        }
        path.push(previous);
        on_step(grid);
        current = previous;
    }
    path
}
