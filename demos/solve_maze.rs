use clap::Parser;
use maze_search::{ImageRenderer, Maze, Search, Strategy, TextRenderer};
use std::path::PathBuf;

/// Solves a text maze. Mazes use `A` for the start, `B` for the goal, spaces for open cells and
/// any other character for walls.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Opts {
    /// The maze file to solve
    maze: PathBuf,

    /// Exploration order: dfs (stack) or bfs (queue)
    #[clap(short, long, default_value = "dfs")]
    strategy: Strategy,

    /// Also mark the cells that were explored
    #[clap(long)]
    show_explored: bool,

    /// Write a PNG drawing of the maze and its solution to this file
    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let maze = Maze::from_file(&opts.maze)?;
    println!("Maze:\n{}", maze);
    println!("Solving...");
    let mut search = Search::new(&maze, opts.strategy);
    let result = search.run().map(|solution| solution.len());
    println!("States Explored: {}", search.num_explored());
    let steps = result?;
    println!("Solution ({} steps):", steps);
    let renderer = TextRenderer {
        show_solution: true,
        show_explored: opts.show_explored,
    };
    println!("{}", renderer.render_search(&search));
    if let Some(output) = &opts.output {
        let renderer = ImageRenderer {
            show_solution: true,
            show_explored: opts.show_explored,
        };
        renderer.save_search(&search, output)?;
        println!("Image written to {}", output.display());
    }
    Ok(())
}
