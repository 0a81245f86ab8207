use crate::cell::CellRole;
use crate::error::GridError;
use crate::pathing_grid::{Grid, GridConfig};
use crate::solver::astar::AstarSolver;
use crate::solver::{GridSolver, PathResult};
use grid_util::Point;
use log::{debug, warn};

/// Pointer and keyboard input understood by a [GridEditor]. Pixel coordinates are relative to the
/// top-left corner of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// Places the start, then the end, then barriers.
    Primary { x: u32, y: u32 },
    /// Erases whatever is on the clicked cell.
    Secondary { x: u32, y: u32 },
    /// Searches for a path between the placed start and end.
    Run,
    /// Throws away the board and starts over with an empty one.
    Clear,
}

/// Owns a [Grid] together with the start and end the user placed on it and keeps the
/// single-start, single-end invariant while cells are edited.
#[derive(Clone, Debug)]
pub struct GridEditor<S: GridSolver = AstarSolver> {
    config: GridConfig,
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    solver: S,
}

impl GridEditor<AstarSolver> {
    pub fn new(config: GridConfig) -> Result<GridEditor<AstarSolver>, GridError> {
        GridEditor::with_solver(config, AstarSolver::new())
    }
}

impl<S: GridSolver> GridEditor<S> {
    pub fn with_solver(config: GridConfig, solver: S) -> Result<GridEditor<S>, GridError> {
        Ok(GridEditor {
            grid: Grid::from_config(&config)?,
            config,
            start: None,
            end: None,
            solver,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Applies a primary click to a cell: the first free click places the start, the next one the
    /// end, every later one a barrier. Clicks on the start or end themselves do nothing.
    pub fn place(&mut self, pos: Point) -> Result<(), GridError> {
        let role = if self.start.is_none() && self.end != Some(pos) {
            self.start = Some(pos);
            CellRole::Start
        } else if self.end.is_none() && self.start != Some(pos) {
            self.end = Some(pos);
            CellRole::End
        } else if self.start != Some(pos) && self.end != Some(pos) {
            CellRole::Barrier
        } else {
            return Ok(());
        };
        self.grid.set_role(pos, role)?;
        debug!("Placed {:?} at {:?}", role, pos);
        Ok(())
    }

    /// Resets a cell, forgetting it as start or end if it was one.
    pub fn erase(&mut self, pos: Point) -> Result<(), GridError> {
        self.grid.reset(pos)?;
        if self.start == Some(pos) {
            self.start = None;
        } else if self.end == Some(pos) {
            self.end = None;
        }
        debug!("Erased {:?}", pos);
        Ok(())
    }

    pub fn primary_click(&mut self, x: u32, y: u32) -> Result<Point, GridError> {
        let pos = self.grid.cell_at_pixel(x, y)?;
        self.place(pos)?;
        Ok(pos)
    }

    pub fn secondary_click(&mut self, x: u32, y: u32) -> Result<Point, GridError> {
        let pos = self.grid.cell_at_pixel(x, y)?;
        self.erase(pos)?;
        Ok(pos)
    }

    /// Rebuilds the grid from the configuration. Any cell reference taken before is stale.
    pub fn clear(&mut self) -> Result<(), GridError> {
        self.grid = Grid::from_config(&self.config)?;
        self.start = None;
        self.end = None;
        debug!("Cleared the board");
        Ok(())
    }

    /// Wipes the marks of the previous run and searches between the placed start and end. Returns
    /// [None] without searching if either is missing.
    pub fn run<F>(&mut self, on_step: F) -> Result<Option<PathResult>, GridError>
    where
        F: FnMut(&Grid),
    {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                self.grid.clear_search_marks();
                self.solver
                    .search(&mut self.grid, start, end, on_step)
                    .map(Some)
            }
            _ => {
                warn!("Both a start and an end are needed to search");
                Ok(None)
            }
        }
    }

    /// Dispatches an event. Only [EditorEvent::Run] can produce a [PathResult].
    pub fn handle<F>(&mut self, event: EditorEvent, on_step: F) -> Result<Option<PathResult>, GridError>
    where
        F: FnMut(&Grid),
    {
        match event {
            EditorEvent::Primary { x, y } => self.primary_click(x, y).map(|_| None),
            EditorEvent::Secondary { x, y } => self.secondary_click(x, y).map(|_| None),
            EditorEvent::Run => self.run(on_step),
            EditorEvent::Clear => self.clear().map(|_| None),
        }
    }
}
