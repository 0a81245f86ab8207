use crate::cell::CellRole;
use crate::error::{GridError, InvalidArgument};
use crate::pathing_grid::Grid;
use crate::search_context::{reconstruct_path, SearchState};
use crate::EDGE_COST;
use grid_util::Point;
use log::{debug, info};
use std::ops::ControlFlow;

pub mod astar;
pub mod dijkstra;

/// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two cells, an
/// admissible and consistent estimate for unit-cost moves on a 4-neighbourhood.
pub fn manhattan(p1: &Point, p2: &Point) -> u32 {
    p1.x.abs_diff(p2.x) + p1.y.abs_diff(p2.y)
}

/// Outcome of a search. Not finding a path is a regular result rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// Cells from start to end, both included.
    Found(Vec<Point>),
    NotFound,
    /// The step callback asked the search to stop.
    Aborted,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            PathResult::Found(path) => Some(path),
            _ => None,
        }
    }
    /// Number of moves along a found path.
    pub fn cost(&self) -> Option<u32> {
        self.path().map(|p| (p.len() as u32 - 1) * EDGE_COST)
    }
}

fn validate_search(grid: &Grid, start: &Point, end: &Point) -> Result<(), InvalidArgument> {
    for p in [start, end] {
        if !grid.in_bounds(*p) {
            return Err(InvalidArgument::NotInGrid(*p));
        }
    }
    if start == end {
        return Err(InvalidArgument::SameStartAndEnd(*start));
    }
    for p in [start, end] {
        if !grid.can_move_to(*p) {
            return Err(InvalidArgument::Barrier(*p));
        }
    }
    Ok(())
}

pub trait GridSolver {
    /// Estimate of the remaining cost from `p1` to `p2`.
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32;

    /// Best-first search from `start` to `end`. `on_step` is called with the grid after every
    /// expansion and after every step of the final path walk, so a display can redraw the
    /// roles written along the way. The end cell shows as [CellRole::OpenFrontier] once
    /// discovered and gets its own role back after the walk.
    fn search<F>(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        mut on_step: F,
    ) -> Result<PathResult, GridError>
    where
        F: FnMut(&Grid),
    {
        self.search_with_abort(grid, start, end, |grid| {
            on_step(grid);
            ControlFlow::Continue(())
        })
    }

    /// Like [search](Self::search), but the search stops with [PathResult::Aborted] as soon as
    /// `on_step` returns [ControlFlow::Break] after an expansion.
    fn search_with_abort<F>(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        mut on_step: F,
    ) -> Result<PathResult, GridError>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        // Nothing may be touched before the arguments are known to be valid
        validate_search(grid, &start, &end)?;
        info!("Searching path from {:?} to {:?}", start, end);

        let end_role = grid.role(end)?;
        let mut state = SearchState::new(start, self.heuristic(&start, &end));
        let mut expanded = 0usize;
        while let Some(current) = state.pop() {
            if current == end {
                let mut path = reconstruct_path(&state.came_from, end, grid, |grid| {
                    let _ = on_step(grid);
                });
                grid.mark(end, end_role);
                path.reverse();
                info!(
                    "Found path of {} moves after {} expansions",
                    path.len() - 1,
                    expanded
                );
                return Ok(PathResult::Found(path));
            }
            expanded += 1;

            let cost = state.g(&current) + EDGE_COST;
            for neighbor in grid.neighborhood_points(&current) {
                if state.is_closed(&neighbor) || cost >= state.g(&neighbor) {
                    continue;
                }
                let estimated_cost = cost + self.heuristic(&neighbor, &end);
                if state.relax(current, neighbor, cost, estimated_cost) {
                    grid.mark(neighbor, CellRole::OpenFrontier);
                }
            }

            let flow = on_step(grid);
            if current != start {
                grid.mark(current, CellRole::ClosedVisited);
            }
            if flow.is_break() {
                info!("Search aborted after {} expansions", expanded);
                return Ok(PathResult::Aborted);
            }
            debug!(
                "Expanded {:?} with estimate {}, {} cells on the frontier",
                current,
                state.f(&current),
                state.frontier_len()
            );
        }
        info!(
            "{:?} is not reachable from {:?}, {} cells expanded",
            end, start, expanded
        );
        Ok(PathResult::NotFound)
    }
}
