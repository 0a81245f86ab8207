use core::fmt;
use grid_util::Point;

/// Reasons a start/end pair is rejected by a search before any state is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Start and end designate the same cell.
    SameStartAndEnd(Point),
    /// The point lies outside the grid.
    NotInGrid(Point),
    /// The point is a barrier cell.
    Barrier(Point),
}

/// Errors produced by [Grid](crate::Grid) construction, cell access and
/// [GridSolver::search](crate::GridSolver::search). Note that the absence of a path is not an error but
/// [PathResult::NotFound](crate::PathResult::NotFound).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Non-positive grid dimension or a zero cell size.
    InvalidConfig { rows: i32, cell_size: u32 },
    /// Coordinate access outside `[0, rows)`.
    OutOfBounds { row: i32, col: i32, rows: usize },
    /// Search called with arguments violating its preconditions.
    InvalidArguments(InvalidArgument),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameStartAndEnd(p) => write!(f, "start and end are the same cell ({}, {})", p.x, p.y),
            Self::NotInGrid(p) => write!(f, "cell ({}, {}) is not in the grid", p.x, p.y),
            Self::Barrier(p) => write!(f, "cell ({}, {}) is a barrier", p.x, p.y),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { rows, cell_size } => write!(
                f,
                "invalid grid configuration: {rows} rows with cell size {cell_size}"
            ),
            Self::OutOfBounds { row, col, rows } => {
                write!(f, "({row}, {col}) is outside a {rows}x{rows} grid")
            }
            Self::InvalidArguments(arg) => write!(f, "invalid search arguments: {arg}"),
        }
    }
}

impl std::error::Error for GridError {}

impl From<InvalidArgument> for GridError {
    fn from(arg: InvalidArgument) -> Self {
        GridError::InvalidArguments(arg)
    }
}
