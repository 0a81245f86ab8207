use grid_astar::{AstarSolver, CellRole, Grid, GridSolver, PathResult};
use grid_util::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::build(3, 10)?;
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    grid.set_role(Point::new(1, 1), CellRole::Barrier)?;
    grid.set_role(start, CellRole::Start)?;
    grid.set_role(end, CellRole::End)?;
    println!("{}", grid);
    if let PathResult::Found(path) = AstarSolver::new().search(&mut grid, start, end, |_| {})? {
        println!("Path:");
        for p in path {
            println!("{:?}", p);
        }
    }
    println!("\n{}", grid);
    Ok(())
}
