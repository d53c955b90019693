/// Fuzzes the search engine by checking for many random mazes that a path is found exactly when
/// the goal is reachable by being part of the same connected component. Both strategies are
/// tested.
use grid_util::point::Point;
use maze_search::{solve, Maze, Search, SearchError, Strategy};
use rand::prelude::*;

fn random_maze(w: usize, h: usize, rng: &mut StdRng) -> Maze {
    let start = Point::new(0, 0);
    let goal = Point::new(w as i32 - 1, h as i32 - 1);
    let mut walls = Vec::new();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let p = Point::new(x, y);
            if p != start && p != goal && rng.gen_bool(0.4) {
                walls.push(p);
            }
        }
    }
    Maze::new(h, w, walls, start, goal).unwrap()
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_MAZES: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_MAZES {
        let maze = random_maze(N, N, &mut rng);
        let reachable = maze.goal_reachable();
        for strategy in Strategy::ALL {
            let mut search = Search::new(&maze, strategy);
            let result = search.run().map(|s| s.clone());
            // Show the maze if the outcome is wrong
            if result.is_ok() != reachable {
                println!("{strategy}\n{maze}");
            }
            match result {
                Ok(solution) => {
                    assert!(reachable);
                    assert!(maze.is_valid_solution(&solution));
                    assert!(search.num_explored() <= N * N);
                }
                Err(err) => {
                    assert!(!reachable);
                    assert_eq!(
                        err,
                        SearchError::NoSolution {
                            num_explored: search.num_explored()
                        }
                    );
                    // Every open cell connected to the start was expanded.
                    assert!(search
                        .explored()
                        .iter()
                        .all(|p| maze.reachable(&maze.start(), p)));
                }
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_MAZES: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_MAZES {
        let maze = random_maze(N, N, &mut rng);
        if !maze.goal_reachable() {
            continue;
        }
        let (dfs, dfs_explored) = solve(&maze, Strategy::DepthFirst).unwrap();
        let (bfs, bfs_explored) = solve(&maze, Strategy::BreadthFirst).unwrap();
        if bfs.len() > dfs.len() {
            println!("DFS path: {:?}\nBFS path: {:?}\n{maze}", dfs.cells, bfs.cells);
        }
        assert!(bfs.len() <= dfs.len());
        // A path of length l needs at least l + 1 removals, the start included.
        assert!(bfs_explored > bfs.len());
        assert!(dfs_explored > dfs.len());
        // Manhattan distance is a lower bound for any path on a 4-grid.
        let (s, g) = (maze.start(), maze.goal());
        let lower_bound = ((g.x - s.x).abs() + (g.y - s.y).abs()) as usize;
        assert!(bfs.len() >= lower_bound);
    }
}

#[test]
fn fuzz_determinism() {
    const N_MAZES: usize = 200;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_MAZES {
        let maze = random_maze(12, 7, &mut rng);
        for strategy in Strategy::ALL {
            let first = solve(&maze, strategy);
            let second = solve(&maze, strategy);
            assert_eq!(first, second);
        }
    }
}
