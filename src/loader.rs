//! Reading mazes from their text form.
//!
//! Every line is a row. `A` marks the start, `B` the goal and a space an open cell; any other
//! character is a wall. Rows shorter than the longest one are padded with open cells.
use crate::error::MazeError;
use crate::maze::Maze;
use grid_util::point::Point;
use log::info;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const START: char = 'A';
pub const GOAL: char = 'B';
pub const OPEN: char = ' ';

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        let starts = contents.matches(START).count();
        if starts != 1 {
            return Err(MazeError::StartMarkers(starts));
        }
        let goals = contents.matches(GOAL).count();
        if goals != 1 {
            return Err(MazeError::GoalMarkers(goals));
        }

        let lines: Vec<&str> = contents.lines().collect();
        let height = lines.len();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut start = None;
        let mut goal = None;
        let mut walls = Vec::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                let point = Point::new(x as i32, y as i32);
                match c {
                    START => start = Some(point),
                    GOAL => goal = Some(point),
                    OPEN => {}
                    _ => walls.push(point),
                }
            }
        }
        let start = start.ok_or(MazeError::StartMarkers(0))?;
        let goal = goal.ok_or(MazeError::GoalMarkers(0))?;
        Maze::new(height, width, walls, start, goal)
    }
}

impl Maze {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Maze, MazeError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let maze: Maze = contents.parse()?;
        info!(
            "Loaded {}x{} maze from {}",
            maze.height(),
            maze.width(),
            path.as_ref().display()
        );
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers_and_walls() {
        let maze: Maze = "#A #\n#  B\n####".parse().unwrap();
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.width(), 4);
        assert_eq!(maze.start(), Point::new(1, 0));
        assert_eq!(maze.goal(), Point::new(3, 1));
        assert!(maze.is_wall(&Point::new(0, 0)).unwrap());
        assert!(!maze.is_wall(&Point::new(2, 0)).unwrap());
        assert!(maze.is_wall(&Point::new(2, 2)).unwrap());
    }

    #[test]
    fn rejects_wrong_marker_counts() {
        assert!(matches!(
            "   \n  B".parse::<Maze>(),
            Err(MazeError::StartMarkers(0))
        ));
        assert!(matches!(
            "A A\n  B".parse::<Maze>(),
            Err(MazeError::StartMarkers(2))
        ));
        assert!(matches!(
            "A  \n   ".parse::<Maze>(),
            Err(MazeError::GoalMarkers(0))
        ));
        assert!(matches!(
            "AB\nBB".parse::<Maze>(),
            Err(MazeError::GoalMarkers(3))
        ));
    }

    #[test]
    fn short_rows_are_padded_with_open_cells() {
        let maze: Maze = "A###\n#\nB###".parse().unwrap();
        assert_eq!(maze.width(), 4);
        assert!(maze.is_wall(&Point::new(0, 1)).unwrap());
        for x in 1..4 {
            assert!(!maze.is_wall(&Point::new(x, 1)).unwrap());
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Maze::from_file("this/maze/does/not/exist.txt");
        assert!(matches!(result, Err(MazeError::Io(_))));
    }
}
