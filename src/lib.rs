//! # grid_astar
//!
//! Shortest paths on a square grid with 4-directional, unit-cost moves, found with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) and the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//!
//! The search writes its progress into the roles of the grid cells (frontier, visited, path) and
//! hands the grid to a step callback after every expansion, so a front-end can animate it. A
//! [GridEditor] turns pointer clicks into start, end and barrier placements.
//!
//! ```
//! use grid_astar::{AstarSolver, CellRole, Grid, GridSolver, PathResult};
//! use grid_util::Point;
//!
//! let mut grid = Grid::build(3, 10).unwrap();
//! grid.set_role(Point::new(1, 1), CellRole::Barrier).unwrap();
//! let (start, end) = (Point::new(0, 0), Point::new(2, 2));
//! let result = AstarSolver::new().search(&mut grid, start, end, |_| {}).unwrap();
//! assert!(matches!(result, PathResult::Found(ref path) if path.len() == 5));
//! ```
mod cell;
mod editor;
mod error;
pub mod pathing_grid;
mod search_context;
pub mod solver;

pub use crate::cell::{Cell, CellRole};
pub use crate::editor::{EditorEvent, GridEditor};
pub use crate::error::{GridError, InvalidArgument};
pub use crate::pathing_grid::{Grid, GridConfig};
pub use crate::search_context::reconstruct_path;
pub use crate::solver::astar::AstarSolver;
pub use crate::solver::dijkstra::DijkstraSolver;
pub use crate::solver::{manhattan, GridSolver, PathResult};

/// Rows (and columns) of the default board.
pub const DEFAULT_ROWS: i32 = 50;
/// Pixel width of the default board.
pub const DEFAULT_WIDTH: u32 = 400;
/// Cost of every move between adjacent cells.
pub const EDGE_COST: u32 = 1;
/// Cost of cells not reached (yet).
pub const UNREACHABLE: u32 = u32::MAX;

pub const N_SMALLVEC_SIZE: usize = 4;
