use grid_util::Point;

/// The state of a single cell. Set up by an editor before a search (Free, Barrier, Start, End) and
/// updated by the search itself (OpenFrontier, ClosedVisited, Path).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellRole {
    #[default]
    Free,
    Barrier,
    Start,
    End,
    OpenFrontier,
    ClosedVisited,
    Path,
}

impl CellRole {
    pub fn is_barrier(self) -> bool {
        self == CellRole::Barrier
    }

    /// Roles written by a search run rather than by the editor.
    pub fn is_search_mark(self) -> bool {
        matches!(
            self,
            CellRole::OpenFrontier | CellRole::ClosedVisited | CellRole::Path
        )
    }

    /// Single character used by the text rendering of a [Grid](crate::Grid).
    pub fn symbol(self) -> char {
        match self {
            CellRole::Free => '.',
            CellRole::Barrier => '#',
            CellRole::Start => 'S',
            CellRole::End => 'E',
            CellRole::OpenFrontier => 'o',
            CellRole::ClosedVisited => 'x',
            CellRole::Path => '*',
        }
    }

    /// RGB colour for graphical front-ends.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            CellRole::Free => [255, 255, 255],
            CellRole::Barrier => [0, 0, 0],
            CellRole::Start => [255, 165, 0],
            CellRole::End => [64, 224, 208],
            CellRole::OpenFrontier => [0, 255, 0],
            CellRole::ClosedVisited => [255, 0, 0],
            CellRole::Path => [128, 0, 128],
        }
    }
}

/// A snapshot of one grid cell: its identity (`pos.x` is the row, `pos.y` the column) and role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Point,
    pub role: CellRole,
}

impl Cell {
    pub fn row(&self) -> i32 {
        self.pos.x
    }
    pub fn col(&self) -> i32 {
        self.pos.y
    }
}
