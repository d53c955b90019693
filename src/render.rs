//! Text and bitmap drawings of a maze, optionally with the solution and the explored cells of a
//! finished search.
use crate::maze::{Action, Maze};
use crate::search::{FxIndexSet, Search};
use crate::solution::Solution;
use core::fmt;
use fxhash::FxHashSet;
use grid_util::point::Point;
use image::{ImageResult, Rgba, RgbaImage};
use log::info;
use std::path::Path;

pub const WALL_GLYPH: char = '█';
pub const SOLUTION_GLYPH: char = '*';
pub const EXPLORED_GLYPH: char = '.';

/// Side length of a cell in pixels, including its border.
pub const CELL_SIZE: u32 = 50;
pub const CELL_BORDER: u32 = 2;

pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WALL_COLOR: Rgba<u8> = Rgba([40, 40, 40, 255]);
pub const START_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const GOAL_COLOR: Rgba<u8> = Rgba([0, 171, 28, 255]);
pub const SOLUTION_COLOR: Rgba<u8> = Rgba([220, 235, 113, 255]);
pub const EXPLORED_COLOR: Rgba<u8> = Rgba([212, 97, 85, 255]);
pub const EMPTY_COLOR: Rgba<u8> = Rgba([237, 240, 252, 255]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Wall,
    Start,
    Goal,
    Solution,
    Explored,
    Empty,
}

/// What gets drawn on top of the bare maze. Explored cells are only shown when a solution
/// exists.
struct Overlay<'a> {
    path: FxHashSet<Point>,
    explored: Option<&'a FxIndexSet<Point>>,
}

impl<'a> Overlay<'a> {
    fn new(
        show_solution: bool,
        show_explored: bool,
        solution: Option<&Solution<Point, Action>>,
        explored: Option<&'a FxIndexSet<Point>>,
    ) -> Overlay<'a> {
        Overlay {
            path: solution
                .filter(|_| show_solution)
                .map(|s| s.cells.iter().copied().collect())
                .unwrap_or_default(),
            explored: explored.filter(|_| show_explored && solution.is_some()),
        }
    }

    fn classify(&self, maze: &Maze, p: Point) -> Cell {
        if maze.is_wall(&p).unwrap_or(true) {
            Cell::Wall
        } else if p == maze.start() {
            Cell::Start
        } else if p == maze.goal() {
            Cell::Goal
        } else if self.path.contains(&p) {
            Cell::Solution
        } else if self.explored.is_some_and(|e| e.contains(&p)) {
            Cell::Explored
        } else {
            Cell::Empty
        }
    }
}

/// Draws a maze as text, one line per row, optionally with a solution and the explored cells.
#[derive(Clone, Copy, Debug)]
pub struct TextRenderer {
    pub show_solution: bool,
    /// Explored cells are only drawn when a solution exists.
    pub show_explored: bool,
}

impl Default for TextRenderer {
    fn default() -> TextRenderer {
        TextRenderer {
            show_solution: true,
            show_explored: false,
        }
    }
}

impl TextRenderer {
    pub fn render(
        &self,
        maze: &Maze,
        solution: Option<&Solution<Point, Action>>,
        explored: Option<&FxIndexSet<Point>>,
    ) -> String {
        let overlay = Overlay::new(self.show_solution, self.show_explored, solution, explored);
        let mut out = String::with_capacity((maze.width() + 1) * maze.height());
        for y in 0..maze.height() as i32 {
            for x in 0..maze.width() as i32 {
                let glyph = match overlay.classify(maze, Point::new(x, y)) {
                    Cell::Wall => WALL_GLYPH,
                    Cell::Start => crate::loader::START,
                    Cell::Goal => crate::loader::GOAL,
                    Cell::Solution => SOLUTION_GLYPH,
                    Cell::Explored => EXPLORED_GLYPH,
                    Cell::Empty => crate::loader::OPEN,
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }

    /// Renders the maze of a finished search together with its outcome.
    pub fn render_search(&self, search: &Search<'_, Maze>) -> String {
        self.render(
            search.problem(),
            search.solution(),
            Some(search.explored()),
        )
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", TextRenderer::default().render(self, None, None))
    }
}

/// Draws a maze as an image of [CELL_SIZE] pixel squares on a black background. Each cell is
/// inset by [CELL_BORDER] pixels so the grid lines stay visible.
#[derive(Clone, Copy, Debug)]
pub struct ImageRenderer {
    pub show_solution: bool,
    /// Explored cells are only drawn when a solution exists.
    pub show_explored: bool,
}

impl Default for ImageRenderer {
    fn default() -> ImageRenderer {
        ImageRenderer {
            show_solution: true,
            show_explored: false,
        }
    }
}

impl ImageRenderer {
    pub fn render(
        &self,
        maze: &Maze,
        solution: Option<&Solution<Point, Action>>,
        explored: Option<&FxIndexSet<Point>>,
    ) -> RgbaImage {
        let overlay = Overlay::new(self.show_solution, self.show_explored, solution, explored);
        let mut img = RgbaImage::from_pixel(
            maze.width() as u32 * CELL_SIZE,
            maze.height() as u32 * CELL_SIZE,
            BACKGROUND_COLOR,
        );
        for y in 0..maze.height() as u32 {
            for x in 0..maze.width() as u32 {
                let fill = match overlay.classify(maze, Point::new(x as i32, y as i32)) {
                    Cell::Wall => WALL_COLOR,
                    Cell::Start => START_COLOR,
                    Cell::Goal => GOAL_COLOR,
                    Cell::Solution => SOLUTION_COLOR,
                    Cell::Explored => EXPLORED_COLOR,
                    Cell::Empty => EMPTY_COLOR,
                };
                // Both corners of the inset square are part of it.
                for py in y * CELL_SIZE + CELL_BORDER..=(y + 1) * CELL_SIZE - CELL_BORDER {
                    for px in x * CELL_SIZE + CELL_BORDER..=(x + 1) * CELL_SIZE - CELL_BORDER {
                        img.put_pixel(px, py, fill);
                    }
                }
            }
        }
        img
    }

    pub fn render_search(&self, search: &Search<'_, Maze>) -> RgbaImage {
        self.render(
            search.problem(),
            search.solution(),
            Some(search.explored()),
        )
    }

    /// Renders the search and writes it to `path`; the format follows the file extension.
    pub fn save_search<P: AsRef<Path>>(&self, search: &Search<'_, Maze>, path: P) -> ImageResult<()> {
        self.render_search(search).save(path.as_ref())?;
        info!("Saved maze image to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::Strategy;

    const PILLAR: &str = "A  \n # \n  B";

    fn cell_center(x: u32, y: u32) -> (u32, u32) {
        (x * CELL_SIZE + CELL_SIZE / 2, y * CELL_SIZE + CELL_SIZE / 2)
    }

    #[test]
    fn plain_maze_round_trips_through_display() {
        let maze: Maze = PILLAR.parse().unwrap();
        assert_eq!(maze.to_string(), "A  \n █ \n  B\n");
    }

    #[test]
    fn draws_solution_and_explored_cells() {
        let maze: Maze = PILLAR.parse().unwrap();
        let mut search = Search::new(&maze, Strategy::BreadthFirst);
        search.run().unwrap();

        let renderer = TextRenderer::default();
        assert_eq!(renderer.render_search(&search), "A  \n*█ \n**B\n");

        let renderer = TextRenderer {
            show_solution: true,
            show_explored: true,
        };
        assert_eq!(renderer.render_search(&search), "A..\n*█.\n**B\n");

        let renderer = TextRenderer {
            show_solution: false,
            show_explored: false,
        };
        assert_eq!(renderer.render_search(&search), "A  \n █ \n  B\n");
    }

    #[test]
    fn explored_cells_need_a_solution() {
        let maze: Maze = "A#B".parse().unwrap();
        let mut search = Search::new(&maze, Strategy::DepthFirst);
        assert!(search.run().is_err());
        let renderer = TextRenderer {
            show_solution: true,
            show_explored: true,
        };
        assert_eq!(renderer.render_search(&search), "A█B\n");
    }

    #[test]
    fn image_cells_use_fixed_colors() {
        let maze: Maze = PILLAR.parse().unwrap();
        let mut search = Search::new(&maze, Strategy::BreadthFirst);
        search.run().unwrap();
        let renderer = ImageRenderer {
            show_solution: true,
            show_explored: true,
        };
        let img = renderer.render_search(&search);
        assert_eq!(img.dimensions(), (3 * CELL_SIZE, 3 * CELL_SIZE));

        let color_at = |(x, y): (u32, u32)| *img.get_pixel(x, y);
        assert_eq!(color_at(cell_center(0, 0)), START_COLOR);
        assert_eq!(color_at(cell_center(2, 2)), GOAL_COLOR);
        assert_eq!(color_at(cell_center(1, 1)), WALL_COLOR);
        assert_eq!(color_at(cell_center(0, 1)), SOLUTION_COLOR);
        assert_eq!(color_at(cell_center(2, 0)), EXPLORED_COLOR);

        // Border pixels around each cell stay background.
        assert_eq!(color_at((0, 0)), BACKGROUND_COLOR);
        assert_eq!(color_at((1, 25)), BACKGROUND_COLOR);
        assert_eq!(color_at((2, 2)), START_COLOR);
        assert_eq!(color_at((48, 48)), START_COLOR);
        assert_eq!(color_at((49, 25)), BACKGROUND_COLOR);
        assert_eq!(color_at((50, 25)), BACKGROUND_COLOR);
        assert_eq!(color_at((52, 25)), EXPLORED_COLOR);
    }

    #[test]
    fn image_hides_explored_cells_without_solution() {
        let maze: Maze = "A #\n  #\n##B".parse().unwrap();
        let mut search = Search::new(&maze, Strategy::DepthFirst);
        assert!(search.run().is_err());
        let renderer = ImageRenderer {
            show_solution: true,
            show_explored: true,
        };
        let img = renderer.render_search(&search);
        assert_eq!(*img.get_pixel(75, 25), EMPTY_COLOR);
        assert_eq!(*img.get_pixel(25, 75), EMPTY_COLOR);
        assert_eq!(*img.get_pixel(125, 125), GOAL_COLOR);

        let plain = ImageRenderer::default().render(&maze, None, None);
        assert_eq!(*plain.get_pixel(125, 25), WALL_COLOR);
    }
}
