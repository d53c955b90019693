use core::fmt;
use grid_util::point::Point;

/// Failures of a single search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// [remove](crate::frontier::Frontier::remove) was called on an empty frontier. Callers are
    /// expected to check [is_empty](crate::frontier::Frontier::is_empty) first, so this points to a
    /// bug in the caller rather than in the maze.
    EmptyFrontier,
    /// Every reachable state was expanded without finding the goal.
    NoSolution { num_explored: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyFrontier => write!(f, "empty frontier"),
            SearchError::NoSolution { num_explored } => {
                write!(f, "no solution after exploring {} states", num_explored)
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Failures while building or loading a [Maze](crate::maze::Maze).
#[derive(Debug)]
pub enum MazeError {
    /// The maze has no rows or no columns.
    Empty,
    /// The text did not contain exactly one start marker; holds the number found.
    StartMarkers(usize),
    /// The text did not contain exactly one goal marker; holds the number found.
    GoalMarkers(usize),
    OutOfBounds(Point),
    /// The start or goal was placed on a wall.
    Blocked(Point),
    Io(std::io::Error),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Empty => write!(f, "maze has no cells"),
            MazeError::StartMarkers(n) => {
                write!(f, "maze must have exactly one start point, found {}", n)
            }
            MazeError::GoalMarkers(n) => write!(f, "maze must have exactly one goal, found {}", n),
            MazeError::OutOfBounds(p) => write!(f, "{} lies outside the maze", p),
            MazeError::Blocked(p) => write!(f, "{} is a wall", p),
            MazeError::Io(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        MazeError::Io(err)
    }
}
