use maze_search::{Maze, Search, Strategy};
use maze_search_benchmark::{get_benchmark, get_benchmark_names};

#[test]
fn all_mazes_have_scenarios() {
    let names = get_benchmark_names();
    assert_eq!(names, vec!["corridor", "open_field", "rooms"]);
    for name in names {
        let (_, scenarios) = get_benchmark(&name);
        assert_eq!(scenarios.len(), Strategy::ALL.len(), "{name}");
    }
}

#[test]
fn verify_solution_lengths() {
    for name in get_benchmark_names() {
        let (maze_str, scenarios) = get_benchmark(&name);
        let maze: Maze = maze_str.parse().unwrap();
        for scenario in &scenarios {
            let strategy: Strategy = scenario.strategy.parse().unwrap();
            println!("Maze: {name}; Strategy: {strategy}");
            let mut search = Search::new(&maze, strategy);
            let solution = search.run().unwrap().clone();
            println!("Length: {}; Explored: {}", solution.len(), search.num_explored());
            assert!(maze.is_valid_solution(&solution));
            assert_eq!(solution.len(), scenario.path_length);
            assert_eq!(search.num_explored(), scenario.num_explored);
        }
    }
}

#[test]
fn breadth_first_is_never_longer() {
    for name in get_benchmark_names() {
        let (maze_str, _) = get_benchmark(&name);
        let maze: Maze = maze_str.parse().unwrap();
        let (dfs, _) = maze_search::solve(&maze, Strategy::DepthFirst).unwrap();
        let (bfs, _) = maze_search::solve(&maze, Strategy::BreadthFirst).unwrap();
        assert!(bfs.len() <= dfs.len(), "{name}");
    }
}
