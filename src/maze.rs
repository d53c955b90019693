use crate::error::MazeError;
use crate::search::SearchProblem;
use crate::solution::Solution;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;

/// One of the four axis-aligned moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All moves in the order in which neighbours are generated.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Offset as (dx, dy), where y grows downwards with the row index.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Action::Up => (0, -1),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }
    pub fn apply(&self, point: &Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx, point.y + dy)
    }
    /// The move leading from `from` to `to`, if they are axis-aligned neighbours.
    pub fn between(from: &Point, to: &Point) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| action.apply(from) == *to)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// Immutable maze on a 4-connected grid. Cells are addressed by [Point]s where `x` is the column
/// and `y` the row; blocked cells are [true] in the underlying [BoolGrid].
///
/// Connected components of open cells are computed once on construction so that reachability
/// questions can be answered without searching.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: BoolGrid,
    start: Point,
    goal: Point,
    components: UnionFind<usize>,
}

impl Maze {
    /// Builds a maze of the given size. Fails if the maze has no cells, if any coordinate is out
    /// of bounds or if the start or goal is a wall.
    pub fn new<I>(
        height: usize,
        width: usize,
        walls: I,
        start: Point,
        goal: Point,
    ) -> Result<Maze, MazeError>
    where
        I: IntoIterator<Item = Point>,
    {
        if height == 0 || width == 0 {
            return Err(MazeError::Empty);
        }
        let mut grid = BoolGrid::new(width, height, false);
        for wall in walls {
            if !grid.point_in_bounds(wall) {
                return Err(MazeError::OutOfBounds(wall));
            }
            grid.set_point(wall, true);
        }
        for p in [start, goal] {
            if !grid.point_in_bounds(p) {
                return Err(MazeError::OutOfBounds(p));
            }
            if grid.get_point(p) {
                return Err(MazeError::Blocked(p));
            }
        }
        let components = generate_components(&grid);
        Ok(Maze {
            grid,
            start,
            goal,
            components,
        })
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn goal(&self) -> Point {
        self.goal
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        self.grid.point_in_bounds(*point)
    }
    /// Whether the cell is blocked. Asking about a cell outside the maze is an error rather than
    /// being treated as open or blocked.
    pub fn is_wall(&self, point: &Point) -> Result<bool, MazeError> {
        if self.in_bounds(point) {
            Ok(self.grid.get_point(*point))
        } else {
            Err(MazeError::OutOfBounds(*point))
        }
    }
    fn is_open(&self, point: &Point) -> bool {
        is_open(&self.grid, point)
    }
    /// Open, in-bounds cells one move away, in the order up, down, left, right. The order decides
    /// which of several solutions a strategy finds first.
    pub fn neighbours(&self, point: &Point) -> Vec<(Action, Point)> {
        Action::ALL
            .into_iter()
            .map(|action| (action, action.apply(point)))
            .filter(|(_, p)| self.is_open(p))
            .collect()
    }

    /// Checks if both cells are open and on the same connected component.
    pub fn reachable(&self, from: &Point, to: &Point) -> bool {
        self.is_open(from)
            && self.is_open(to)
            && self
                .components
                .equiv(self.grid.get_ix_point(from), self.grid.get_ix_point(to))
    }
    pub fn goal_reachable(&self) -> bool {
        self.reachable(&self.start, &self.goal)
    }

    /// Checks that the solution leads from the start to the goal through open cells, one
    /// correctly labelled move at a time.
    pub fn is_valid_solution(&self, solution: &Solution<Point, Action>) -> bool {
        if solution.actions.len() != solution.cells.len() {
            return false;
        }
        if solution.is_empty() {
            return self.start == self.goal;
        }
        solution.cells.last() == Some(&self.goal)
            && std::iter::once(&self.start)
                .chain(solution.cells.iter())
                .tuple_windows()
                .zip(solution.actions.iter())
                .all(|((from, to), action)| {
                    self.is_open(to) && Action::between(from, to) == Some(*action)
                })
    }
}

fn is_open(grid: &BoolGrid, point: &Point) -> bool {
    grid.point_in_bounds(*point) && !grid.get_point(*point)
}

/// Links up open neighbours in a new [UnionFind] structure.
fn generate_components(grid: &BoolGrid) -> UnionFind<usize> {
    let (w, h) = (grid.width(), grid.height());
    debug!("Generating connected components for {}x{} maze", h, w);
    let mut components = UnionFind::new(w * h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let point = Point::new(x, y);
            if !is_open(grid, &point) {
                continue;
            }
            // Down and right suffice, every other edge is covered from the other end.
            for action in [Action::Down, Action::Right] {
                let neighbour = action.apply(&point);
                if is_open(grid, &neighbour) {
                    components.union(grid.get_ix_point(&point), grid.get_ix_point(&neighbour));
                }
            }
        }
    }
    components
}

impl SearchProblem for Maze {
    type State = Point;
    type Action = Action;
    type Successors = Vec<(Action, Point)>;

    fn initial_state(&self) -> Point {
        self.start
    }
    fn is_goal(&self, state: &Point) -> bool {
        *state == self.goal
    }
    fn successors(&self, state: &Point) -> Vec<(Action, Point)> {
        self.neighbours(state)
    }
}
