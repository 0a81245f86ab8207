use grid_util::Point;

use crate::solver::{manhattan, GridSolver};

/// A* guided by the Manhattan distance to the goal.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32 {
        manhattan(p1, p2)
    }
}
