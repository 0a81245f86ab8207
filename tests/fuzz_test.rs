//! Fuzzes the search by checking on many random grids that a path is found exactly when start and
//! goal share a connected component, and that its length matches a breadth-first search.
use grid_astar::{manhattan, AstarSolver, CellRole, DijkstraSolver, Grid, GridSolver, PathResult};
use grid_util::Point;
use rand::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

fn random_grid(n: i32, rng: &mut StdRng) -> Grid {
    random_grid_with_density(n, 0.4, rng)
}

fn random_grid_with_density(n: i32, density: f64, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::build(n, 1).unwrap();
    for x in 0..n {
        for y in 0..n {
            if rng.gen_bool(density) {
                grid.set_role(Point::new(x, y), CellRole::Barrier).unwrap();
            }
        }
    }
    grid
}

fn visualize_grid(grid: &Grid, start: &Point, end: &Point) {
    for x in 0..grid.rows() as i32 {
        for y in 0..grid.rows() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.can_move_to(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Length of the shortest path in moves, if any.
fn bfs_distance(grid: &Grid, start: Point, end: Point) -> Option<u32> {
    let n = grid.rows();
    let mut dist = vec![None; n * n];
    let ix = |p: &Point| p.x as usize * n + p.y as usize;
    dist[ix(&start)] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let d = dist[ix(&p)].unwrap();
        if p == end {
            return Some(d);
        }
        for q in grid.neighbors_of(p).unwrap() {
            if dist[ix(&q)].is_none() {
                dist[ix(&q)] = Some(d + 1);
                queue.push_back(q);
            }
        }
    }
    None
}

/// Outcome of [ordered_set_search]: path length, number of step frames, the marked grid and how
/// often a queued cell got a shorter route.
struct Replay {
    cost: Option<u32>,
    steps: usize,
    grid: Grid,
    improved_in_frontier: usize,
}

/// Best-first search over an ordered set of (estimate, insertion counter, cell). A cell is only
/// inserted when it is not queued yet, so a shorter route to a queued cell leaves its key as is.
/// Settled cells are final.
fn ordered_set_search(grid: &Grid, start: Point, end: Point) -> Replay {
    let mut grid = grid.clone();
    let end_role = grid.role(end).unwrap();
    let key = |p: &Point| (p.x, p.y);
    let mut g_score: HashMap<Point, u32> = HashMap::from([(start, 0)]);
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut open: BTreeSet<(u32, u64, (i32, i32))> = BTreeSet::new();
    let mut queued: HashSet<Point> = HashSet::from([start]);
    let mut settled: HashSet<Point> = HashSet::new();
    let mut counter = 0u64;
    let mut steps = 0;
    let mut improved_in_frontier = 0;
    open.insert((manhattan(&start, &end), counter, key(&start)));

    while let Some((_, _, (x, y))) = open.pop_first() {
        let current = Point::new(x, y);
        queued.remove(&current);
        settled.insert(current);
        if current == end {
            let mut cost = 0;
            let mut p = end;
            while let Some(&prev) = came_from.get(&p) {
                if prev != start {
                    grid.set_role(prev, CellRole::Path).unwrap();
                }
                steps += 1;
                cost += 1;
                p = prev;
            }
            grid.set_role(end, end_role).unwrap();
            return Replay {
                cost: Some(cost),
                steps,
                grid,
                improved_in_frontier,
            };
        }
        let tentative = g_score[&current] + 1;
        for neighbor in grid.neighbors_of(current).unwrap() {
            if settled.contains(&neighbor) {
                continue;
            }
            if tentative < g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative);
                if queued.contains(&neighbor) {
                    improved_in_frontier += 1;
                } else {
                    counter += 1;
                    open.insert((tentative + manhattan(&neighbor, &end), counter, key(&neighbor)));
                    queued.insert(neighbor);
                    grid.set_role(neighbor, CellRole::OpenFrontier).unwrap();
                }
            }
        }
        steps += 1;
        if current != start {
            grid.set_role(current, CellRole::ClosedVisited).unwrap();
        }
    }
    Replay {
        cost: None,
        steps,
        grid,
        improved_in_frontier,
    }
}

fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, end: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for w in path.windows(2) {
        assert!(grid.neighbors_of(w[0]).unwrap().contains(&w[1]));
    }
}

#[test]
fn fuzz() {
    const N: i32 = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    let start = Point::new(0, 0);
    let end = Point::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.set_role(start, CellRole::Start).unwrap();
        grid.set_role(end, CellRole::End).unwrap();
        let reachable = grid.reachable(&start, &end);
        let result = solver.search(&mut grid, start, end, |_| {}).unwrap();
        // Show the grid if the outcome is wrong
        if result.is_found() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(result.is_found(), reachable);
        assert_eq!(result.cost(), bfs_distance(&grid, start, end));
        if let PathResult::Found(path) = &result {
            assert_valid_path(&grid, path, start, end);
            assert_eq!(grid.count_role(CellRole::Path), path.len() - 2);
        }
    }
}

/// Every reachable pair on small grids gets a shortest path, from both solvers.
#[test]
fn fuzz_distance_all_pairs() {
    const N: i32 = 5;
    const N_GRIDS: usize = 40;
    let mut rng = StdRng::seed_from_u64(0);
    let astar = AstarSolver::new();
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        let free: Vec<Point> = grid
            .cells()
            .filter(|c| c.role != CellRole::Barrier)
            .map(|c| c.pos)
            .collect();
        for &start in &free {
            for &end in &free {
                if start == end {
                    continue;
                }
                let expected = bfs_distance(&grid, start, end);
                let result = astar.search(&mut grid, start, end, |_| {}).unwrap();
                if result.cost() != expected {
                    visualize_grid(&grid, &start, &end);
                }
                assert_eq!(result.cost(), expected);
                if let Some(path) = result.path() {
                    assert_valid_path(&grid, path, start, end);
                }
                let dijkstra = DijkstraSolver.search(&mut grid, start, end, |_| {}).unwrap();
                assert_eq!(dijkstra.cost(), expected);
                grid.clear_search_marks();
            }
        }
    }
}

/// Runs on identical grids produce identical paths and identical role snapshots at every step.
#[test]
fn fuzz_determinism() {
    const N: i32 = 12;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    for _ in 0..200 {
        let grid = random_grid(N, &mut rng);
        let start = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let end = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
        if start == end || !grid.can_move_to(start) || !grid.can_move_to(end) {
            continue;
        }
        let run = |mut grid: Grid| {
            let mut frames = Vec::new();
            let result = solver
                .search(&mut grid, start, end, |g| frames.push(g.to_string()))
                .unwrap();
            (result, frames)
        };
        assert_eq!(run(grid.clone()), run(grid.clone()));
    }
}

/// Expansions, step frames and final marks agree with a plain ordered-set search, including on
/// grids where a queued cell is reached again by a shorter route.
#[test]
fn fuzz_expansions_match_ordered_set_search() {
    const N: i32 = 10;
    const N_GRIDS: usize = 1500;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    let mut improved_in_frontier = 0;
    for _ in 0..N_GRIDS {
        let grid = random_grid_with_density(N, 0.3, &mut rng);
        let start = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let end = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
        if start == end || !grid.can_move_to(start) || !grid.can_move_to(end) {
            continue;
        }
        let expected = ordered_set_search(&grid, start, end);
        improved_in_frontier += expected.improved_in_frontier;

        let mut actual = grid.clone();
        let mut steps = 0;
        let result = solver
            .search(&mut actual, start, end, |_| steps += 1)
            .unwrap();
        if steps != expected.steps {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(result.cost(), expected.cost);
        assert_eq!(steps, expected.steps);
        assert_eq!(actual.to_string(), expected.grid.to_string());
    }
    // The comparison has to cover shorter routes to queued cells
    assert!(improved_in_frontier > 0);
}
