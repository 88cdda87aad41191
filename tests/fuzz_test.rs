/// Fuzzes the pathfinding system by checking on many seeded random grids that a path is found
/// exactly when the goal is reachable, that every path is a valid walk, and that its length
/// matches a brute-force breadth-first search.
use std::collections::VecDeque;

use rand::prelude::*;
use tile_pathing::{Cell, GridConfig, GridMap, PathExecutor, PathFinder};

fn random_grid(n: usize, rng: &mut StdRng) -> GridMap {
    let config = GridConfig::new(n, n)
        .with_obstacle_rate(rng.gen_range(0.0..0.5))
        .with_seed(rng.gen());
    GridMap::generate(&config).unwrap()
}

fn random_grid_cell(grid: &GridMap, rng: &mut StdRng) -> Cell {
    Cell::new(
        rng.gen_range(0..grid.width()) as i32,
        rng.gen_range(0..grid.height()) as i32,
    )
}

/// Shortest number of steps by breadth-first search, [None] if unreachable.
fn bfs_distance(grid: &GridMap, start: Cell, goal: Cell) -> Option<usize> {
    if grid.is_blocked(start) || grid.is_blocked(goal) {
        return None;
    }
    let mut dist = vec![usize::MAX; grid.width() * grid.height()];
    let ix = |c: Cell| c.y as usize * grid.width() + c.x as usize;
    let mut queue = VecDeque::from([start]);
    dist[ix(start)] = 0;
    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            return Some(dist[ix(cell)]);
        }
        for n in cell.neumann_neighborhood() {
            if grid.is_walkable(n) && dist[ix(n)] == usize::MAX {
                dist[ix(n)] = dist[ix(cell)] + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn visualize_grid(grid: &GridMap, start: &Cell, end: &Cell) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Cell::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_blocked(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let finder = PathFinder::new();
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng);
        let start = grid.spawn();
        let goal = random_grid_cell(&grid, &mut rng);
        let path = finder.find(&grid, start, goal);
        let expected = bfs_distance(&grid, start, goal);
        // Show the grid if the search disagrees with the brute force
        if expected.unwrap_or(0) != path.len() {
            visualize_grid(&grid, &start, &goal);
        }
        assert_eq!(path.len(), expected.unwrap_or(0));
        assert_eq!(
            grid.reachable(&start, &goal),
            expected.is_some(),
            "components disagree with breadth-first search"
        );
        if !path.is_empty() {
            assert!(path.is_contiguous_from(start));
            assert!(path.iter().all(|c| grid.is_walkable(*c)));
            assert_eq!(path.goal(), Some(goal));
        }
    }
}

#[test]
fn fuzz_executor_follows_path() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(1);
    let finder = PathFinder::new();
    for _ in 0..500 {
        let grid = random_grid(N, &mut rng);
        let mut executor = PathExecutor::new(grid.spawn());
        let goal = random_grid_cell(&grid, &mut rng);
        let path = finder.find(&grid, executor.agent_cell(), goal);
        let steps = path.len();
        executor.begin(path).unwrap();
        for _ in 0..steps {
            let before = executor.agent_cell();
            let after = executor.tick().unwrap();
            assert!(before.is_adjacent(&after));
        }
        assert!(!executor.is_moving());
        assert_eq!(executor.move_count(), steps as u64);
        if steps > 0 {
            assert_eq!(executor.agent_cell(), goal);
        }
    }
}
