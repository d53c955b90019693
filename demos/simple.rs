use grid_util::point::Point;
use maze_search::{Maze, Search, Strategy, TextRenderer};

// In this example a path is found on a 4x5 maze with shape
//  _____
// |A    |
// | ### |
// |   #B|
// | #   |
//  _____
// where
// - # marks a wall
// - A marks the start
// - B marks the goal
//
// Moves are restricted to up, down, left and right.

fn main() -> anyhow::Result<()> {
    let walls = [
        Point::new(1, 1),
        Point::new(2, 1),
        Point::new(3, 1),
        Point::new(3, 2),
        Point::new(1, 3),
    ];
    let maze = Maze::new(4, 5, walls, Point::new(0, 0), Point::new(4, 2))?;
    println!("{}", maze);
    let renderer = TextRenderer {
        show_solution: true,
        show_explored: true,
    };
    for strategy in Strategy::ALL {
        let mut search = Search::new(&maze, strategy);
        let solution = search.run()?;
        println!("{}: {} steps", strategy, solution.len());
        for (action, cell) in solution.actions.iter().zip(&solution.cells) {
            println!("{} -> {}", action, cell);
        }
        println!("States explored: {}", search.num_explored());
        println!("{}", renderer.render_search(&search));
    }
    Ok(())
}
