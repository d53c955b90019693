//! # maze_search
//!
//! Solves mazes on a 4-connected grid with uninformed search. The engine in [search] is generic
//! over any [SearchProblem]; its [Frontier] removes nodes either last-in-first-out
//! ([depth-first](Strategy::DepthFirst)) or first-in-first-out
//! ([breadth-first](Strategy::BreadthFirst)). Every state is expanded at most once, and the
//! solution is reconstructed by following parent links from the goal back to the start.
//!
//! Breadth-first search finds a path with the fewest moves. Depth-first search usually explores
//! fewer cells on long corridors but gives no guarantee on path length.
//!
//! ```
//! use maze_search::{Maze, Search, Strategy};
//!
//! let maze: Maze = "A  \n # \n  B".parse().unwrap();
//! let mut search = Search::new(&maze, Strategy::BreadthFirst);
//! let solution = search.run().unwrap();
//! assert_eq!(solution.len(), 4);
//! assert!(maze.is_valid_solution(solution));
//! ```
pub mod error;
pub mod frontier;
pub mod loader;
pub mod maze;
pub mod node;
pub mod render;
pub mod search;
pub mod solution;

pub use error::{MazeError, SearchError};
pub use frontier::{Frontier, Strategy};
pub use maze::{Action, Maze};
pub use node::{NodeId, SearchNode};
pub use render::{ImageRenderer, TextRenderer};
pub use search::{solve, Search, SearchProblem, SearchStatus};
pub use solution::Solution;
