#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Snake Maze engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for adapters and
//! systems to react to deterministically. Systems consume read-only views and
//! respond exclusively with computed candidates.

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Snake Maze.";

/// Hard upper bound on the number of grid rows a map descriptor may declare.
pub const MAX_GRID_ROWS: u32 = 50;

/// Hard upper bound on the number of grid columns a map descriptor may declare.
pub const MAX_GRID_COLS: u32 = 80;

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Begins play from the main menu.
    Start,
    /// Requests that the agent attempt a single step in the provided
    /// direction; the chaser pursues in the same turn.
    Move {
        /// Direction of travel for the attempted step.
        direction: Direction,
    },
    /// Rewinds the most recently completed turn.
    Undo,
    /// Rebuilds the board from the loaded descriptor once a game has ended.
    Restart,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that play began from the main menu.
    Started,
    /// Confirms that the agent committed a step between two cells.
    AgentMoved {
        /// Cell the agent occupied before moving.
        from: Position,
        /// Cell the agent occupies after completing the move.
        to: Position,
        /// Facing recorded on the agent's new cell.
        facing: Direction,
    },
    /// Reports that a directional command failed validation and left the
    /// agent untouched.
    MoveRejected {
        /// Direction of the rejected step.
        direction: Direction,
    },
    /// Confirms that the chaser committed a step between two distinct cells.
    ChaserMoved {
        /// Cell the chaser occupied before moving.
        from: Position,
        /// Cell the chaser occupies after completing the move.
        to: Position,
    },
    /// Announces that the agent reached the goal cell.
    GoalReached {
        /// Cell where the goal was claimed.
        cell: Position,
    },
    /// Announces that the chaser caught the agent.
    AgentCaught {
        /// Cell where the two entities collided.
        cell: Position,
    },
    /// Confirms that a turn was rewound, carrying the restored positions.
    TurnUndone {
        /// Position the agent was restored to, when it moved that turn.
        agent: Option<Position>,
        /// Position the chaser was restored to, when it stepped that turn.
        chaser: Option<Position>,
    },
    /// Announces a fresh board rebuilt from the loaded descriptor.
    Restarted,
}

/// Cardinal movement directions available to the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

/// Location of a single grid cell expressed as row and column coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: u32,
    col: u32,
}

impl Position {
    /// Creates a new grid position.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn col(&self) -> u32 {
        self.col
    }

    /// Computes the adjacent position one step in the provided direction.
    ///
    /// Returns `None` when the step would leave the unsigned coordinate
    /// space; callers treat that exactly like any other out-of-bounds
    /// candidate.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (row, col) = match direction {
            Direction::Up => match self.row.checked_sub(1) {
                Some(row) => (row, self.col),
                None => return None,
            },
            Direction::Down => match self.row.checked_add(1) {
                Some(row) => (row, self.col),
                None => return None,
            },
            Direction::Left => match self.col.checked_sub(1) {
                Some(col) => (self.row, col),
                None => return None,
            },
            Direction::Right => match self.col.checked_add(1) {
                Some(col) => (self.row, col),
                None => return None,
            },
        };
        Some(Self { row, col })
    }

    /// Computes the Manhattan distance between two positions.
    #[must_use]
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Content of a single grid cell.
///
/// The grid is the authoritative glyph layer consumed by renderers; terminal
/// decisions derive from tracked entity positions rather than cell contents,
/// so a goal marker overwritten by a passing agent stays erased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Traversable floor carrying no marker.
    Empty,
    /// Impassable border cell.
    Wall,
    /// Impassable interior block placed by the map descriptor.
    Obstacle,
    /// The cell the agent must reach to win.
    Goal,
    /// Cell currently occupied by the chaser.
    Chaser,
    /// Cell currently occupied by the agent.
    Agent {
        /// Direction of the agent's most recent committed move.
        facing: Direction,
    },
}

/// Lifecycle state of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Waiting for play to begin; directional input is ignored.
    MainMenu,
    /// Turns are being accepted and executed.
    Playing,
    /// A terminal condition was reached; only a restart is accepted.
    GameOver,
}

/// Terminal result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The agent reached the goal cell.
    Won,
    /// The chaser caught the agent.
    Lost,
}

/// Read-only view into the dense cell grid.
///
/// The view carries the single movement-validity predicate shared by the
/// agent commit gate, the chaser commit gate, and tests.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    cells: &'a [Cell],
    rows: u32,
    cols: u32,
}

impl<'a> GridView<'a> {
    /// Captures a new grid view backed by the provided cell slice.
    #[must_use]
    pub fn new(cells: &'a [Cell], rows: u32, cols: u32) -> Self {
        Self { cells, rows, cols }
    }

    /// Returns the content of the provided cell, if it lies within bounds.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Reports whether an entity may occupy the provided cell.
    ///
    /// Occupancy requires the position to fall inside the grid and the cell
    /// to be neither a wall nor an obstacle. Goal, agent, and chaser cells
    /// remain enterable so entities can step onto one another.
    #[must_use]
    pub fn can_occupy(&self, position: Position) -> bool {
        match self.cell(position) {
            None | Some(Cell::Wall | Cell::Obstacle) => false,
            Some(_) => true,
        }
    }

    /// Reports whether the provided cell holds an obstacle.
    ///
    /// The pursuit heuristic screens candidate axes against obstacles alone,
    /// deliberately ignoring walls and bounds until the commit gate.
    #[must_use]
    pub fn is_obstacle(&self, position: Position) -> bool {
        matches!(self.cell(position), Some(Cell::Obstacle))
    }

    /// Provides the dimensions of the underlying grid as `(rows, cols)`.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    fn index(&self, position: Position) -> Option<usize> {
        if position.row() < self.rows && position.col() < self.cols {
            let row = usize::try_from(position.row()).ok()?;
            let col = usize::try_from(position.col()).ok()?;
            let width = usize::try_from(self.cols).ok()?;
            Some(row * width + col)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Direction, GridView, Mode, Outcome, Position};
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn step_moves_one_cell_in_each_direction() {
        let origin = Position::new(3, 4);
        assert_eq!(origin.step(Direction::Up), Some(Position::new(2, 4)));
        assert_eq!(origin.step(Direction::Down), Some(Position::new(4, 4)));
        assert_eq!(origin.step(Direction::Left), Some(Position::new(3, 3)));
        assert_eq!(origin.step(Direction::Right), Some(Position::new(3, 5)));
    }

    #[test]
    fn step_off_the_coordinate_space_is_none() {
        assert_eq!(Position::new(0, 5).step(Direction::Up), None);
        assert_eq!(Position::new(5, 0).step(Direction::Left), None);
    }

    #[test]
    fn manhattan_distance_matches_expectation() {
        let origin = Position::new(1, 1);
        let destination = Position::new(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
    }

    fn sample_cells() -> Vec<Cell> {
        vec![
            Cell::Wall,
            Cell::Wall,
            Cell::Wall,
            Cell::Wall,
            Cell::Empty,
            Cell::Obstacle,
            Cell::Goal,
            Cell::Chaser,
            Cell::Agent {
                facing: Direction::Up,
            },
        ]
    }

    #[test]
    fn view_rejects_walls_obstacles_and_out_of_bounds() {
        let cells = sample_cells();
        let view = GridView::new(&cells, 3, 3);
        assert!(!view.can_occupy(Position::new(0, 0)));
        assert!(!view.can_occupy(Position::new(1, 2)));
        assert!(!view.can_occupy(Position::new(3, 0)));
        assert!(!view.can_occupy(Position::new(0, 7)));
    }

    #[test]
    fn view_allows_floor_goal_and_occupied_cells() {
        let cells = sample_cells();
        let view = GridView::new(&cells, 3, 3);
        assert!(view.can_occupy(Position::new(1, 1)));
        assert!(view.can_occupy(Position::new(2, 0)));
        assert!(view.can_occupy(Position::new(2, 1)));
        assert!(view.can_occupy(Position::new(2, 2)));
    }

    #[test]
    fn obstacle_screen_ignores_walls_and_bounds() {
        let cells = sample_cells();
        let view = GridView::new(&cells, 3, 3);
        assert!(view.is_obstacle(Position::new(1, 2)));
        assert!(!view.is_obstacle(Position::new(0, 0)));
        assert!(!view.is_obstacle(Position::new(9, 9)));
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn position_round_trips_through_bincode() {
        assert_round_trip(&Position::new(7, 11));
    }

    #[test]
    fn agent_cell_round_trips_through_bincode() {
        assert_round_trip(&Cell::Agent {
            facing: Direction::Left,
        });
    }

    #[test]
    fn mode_and_outcome_round_trip_through_bincode() {
        assert_round_trip(&Mode::GameOver);
        assert_round_trip(&Outcome::Won);
    }
}
