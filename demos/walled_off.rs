use grid_astar::{AstarSolver, CellRole, Grid, GridSolver};
use grid_util::Point;

// The goal sits behind a wall spanning the whole grid, so the search expands every cell on the
// left and reports that no path exists:
// S#E
// .#.
// .#.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::build(3, 10)?;
    for row in 0..3 {
        grid.set_role(Point::new(row, 1), CellRole::Barrier)?;
    }
    let start = Point::new(0, 0);
    let end = Point::new(0, 2);
    grid.set_role(start, CellRole::Start)?;
    grid.set_role(end, CellRole::End)?;
    let mut step = 0;
    let result = AstarSolver::new().search(&mut grid, start, end, |grid| {
        step += 1;
        println!("Step {step}:\n{grid}");
    })?;
    println!("{:?}", result);
    Ok(())
}
