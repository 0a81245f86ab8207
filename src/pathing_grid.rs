use crate::cell::{Cell, CellRole};
use crate::error::GridError;
use crate::{DEFAULT_ROWS, DEFAULT_WIDTH, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::{Point, SimpleValueGrid, ValueGrid};
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Construction-time parameters of a [Grid]: the number of rows (and columns) and the pixel width
/// of the whole board, from which the size of a single cell follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: i32,
    pub width: u32,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: DEFAULT_ROWS,
            width: DEFAULT_WIDTH,
        }
    }
}

impl GridConfig {
    pub fn new(rows: i32, width: u32) -> GridConfig {
        GridConfig { rows, width }
    }
    /// Pixel size of a single cell, zero if the configuration is invalid.
    pub fn cell_size(&self) -> u32 {
        if self.rows > 0 {
            self.width / self.rows as u32
        } else {
            0
        }
    }
}

/// A square grid of cells, each carrying a [CellRole]. Points address cells with `x` as the row and
/// `y` as the column, both in `[0, rows)`. Adjacency is derived from the current roles on every
/// call rather than stored, so barriers may be edited freely between searches.
#[derive(Clone, Debug)]
pub struct Grid {
    roles: SimpleValueGrid<CellRole>,
    rows: usize,
    cell_size: u32,
}

impl Grid {
    /// Allocates a `rows` by `rows` grid with every cell [CellRole::Free].
    pub fn build(rows: i32, cell_size: u32) -> Result<Grid, GridError> {
        if rows <= 0 || cell_size == 0 {
            return Err(GridError::InvalidConfig { rows, cell_size });
        }
        debug!("Building {rows}x{rows} grid with cell size {cell_size}");
        let n = rows as usize;
        Ok(Grid {
            roles: SimpleValueGrid::new(n, n, CellRole::Free),
            rows: n,
            cell_size,
        })
    }

    pub fn from_config(config: &GridConfig) -> Result<Grid, GridError> {
        if config.rows <= 0 {
            return Err(GridError::InvalidConfig {
                rows: config.rows,
                cell_size: 0,
            });
        }
        Grid::build(config.rows, config.cell_size())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        let n = self.rows as i32;
        (0..n).contains(&pos.x) && (0..n).contains(&pos.y)
    }

    fn check(&self, pos: Point) -> Result<(), GridError> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                row: pos.x,
                col: pos.y,
                rows: self.rows,
            })
        }
    }

    pub fn cell_at(&self, row: i32, col: i32) -> Result<Cell, GridError> {
        let pos = Point::new(row, col);
        Ok(Cell {
            pos,
            role: self.role(pos)?,
        })
    }

    pub fn role(&self, pos: Point) -> Result<CellRole, GridError> {
        self.check(pos)?;
        Ok(self.roles.get(pos.x, pos.y))
    }

    /// Assigns a role to a cell. Keeping a single start and end is up to the caller, see
    /// [GridEditor](crate::GridEditor).
    pub fn set_role(&mut self, pos: Point, role: CellRole) -> Result<(), GridError> {
        self.check(pos)?;
        self.roles.set(pos.x, pos.y, role);
        Ok(())
    }

    /// Role update for points already known to be in bounds.
    pub(crate) fn mark(&mut self, pos: Point, role: CellRole) {
        debug_assert!(self.in_bounds(pos));
        self.roles.set(pos.x, pos.y, role);
    }

    /// Sets a cell back to [CellRole::Free]. The grid does not track which cell is the start or end,
    /// so a caller resetting one of those must drop its own reference.
    pub fn reset(&mut self, pos: Point) -> Result<(), GridError> {
        self.set_role(pos, CellRole::Free)
    }

    /// Reverts every cell marked by a previous search back to [CellRole::Free].
    pub fn clear_search_marks(&mut self) {
        for (x, y) in iproduct!(0..self.rows as i32, 0..self.rows as i32) {
            if self.roles.get(x, y).is_search_mark() {
                self.roles.set(x, y, CellRole::Free);
            }
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        iproduct!(0..self.rows as i32, 0..self.rows as i32).map(move |(x, y)| Cell {
            pos: Point::new(x, y),
            role: self.roles.get(x, y),
        })
    }

    pub fn count_role(&self, role: CellRole) -> usize {
        self.cells().filter(|c| c.role == role).count()
    }

    /// Non-barrier neighbours of a cell in the fixed order down, up, right, left.
    pub fn neighbors_of(&self, pos: Point) -> Result<SmallVec<[Point; N_SMALLVEC_SIZE]>, GridError> {
        self.check(pos)?;
        Ok(self.neighborhood_points(&pos))
    }

    pub(crate) fn neighborhood_points(&self, pos: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        [
            Point::new(pos.x + 1, pos.y),
            Point::new(pos.x - 1, pos.y),
            Point::new(pos.x, pos.y + 1),
            Point::new(pos.x, pos.y - 1),
        ]
        .into_iter()
        .filter(|p| self.can_move_to(*p))
        .collect()
    }

    pub fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos) && !self.roles.get(pos.x, pos.y).is_barrier()
    }

    /// Top-left pixel of a cell on the board.
    pub fn cell_origin(&self, pos: Point) -> Result<(u32, u32), GridError> {
        self.check(pos)?;
        Ok((pos.x as u32 * self.cell_size, pos.y as u32 * self.cell_size))
    }

    /// Maps a pixel on the board to the cell containing it.
    pub fn cell_at_pixel(&self, px: u32, py: u32) -> Result<Point, GridError> {
        let index = |p: u32| i32::try_from(p / self.cell_size).unwrap_or(i32::MAX);
        let pos = Point::new(index(px), index(py));
        self.check(pos)?;
        Ok(pos)
    }

    fn get_ix_point(&self, pos: &Point) -> usize {
        pos.x as usize * self.rows + pos.y as usize
    }

    /// Generates a [UnionFind] structure linking up every pair of adjacent non-barrier cells.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.rows * self.rows);
        for (x, y) in iproduct!(0..self.rows as i32, 0..self.rows as i32) {
            let point = Point::new(x, y);
            if !self.can_move_to(point) {
                continue;
            }
            let parent_ix = self.get_ix_point(&point);
            // Linking down and right covers every edge once
            for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(p) {
                    components.union(parent_ix, self.get_ix_point(&p));
                }
            }
        }
        components
    }

    /// Checks if start and goal lie on the same connected component. Recomputes the components.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.can_move_to(*start) || !self.can_move_to(*goal) {
            return false;
        }
        self.components()
            .equiv(self.get_ix_point(start), self.get_ix_point(goal))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for x in 0..self.rows as i32 {
            let line = (0..self.rows as i32)
                .map(|y| self.roles.get(x, y).symbol())
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
