use grid_util::Point;

use crate::solver::GridSolver;

/// Uniform-cost search: the same engine with a zero estimate, so cells are expanded purely in
/// order of their distance from the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> u32 {
        0
    }
}
