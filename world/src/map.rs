//! Map descriptor parsing and loading for the world crate.
//!
//! A descriptor is a whitespace-separated sequence of unsigned integers:
//! three header fields `object_count rows cols` followed by `object_count`
//! triples of `row col code`. Codes place the chaser (0), the agent (1), the
//! goal (2), and obstacles (3). Parsing validates the descriptor completely;
//! a successfully parsed value can always be turned into a playable world.

use std::{
    fmt, fs,
    num::ParseIntError,
    path::{Path, PathBuf},
};

use snake_maze_core::{Position, MAX_GRID_COLS, MAX_GRID_ROWS};
use thiserror::Error;

const CODE_CHASER: u32 = 0;
const CODE_AGENT: u32 = 1;
const CODE_GOAL: u32 = 2;
const CODE_OBSTACLE: u32 = 3;

/// Kinds of objects a descriptor triple may place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// The adversarial chaser.
    Chaser,
    /// The player-controlled agent.
    Agent,
    /// The goal cell.
    Goal,
    /// A static interior block.
    Obstacle,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Chaser => "chaser",
            Self::Agent => "agent",
            Self::Goal => "goal",
            Self::Obstacle => "obstacle",
        };
        f.write_str(label)
    }
}

/// Reasons a map descriptor cannot be turned into a playable world.
///
/// Every variant is fatal at startup; the kernel never raises one mid-game.
#[derive(Debug, Error)]
pub enum MapError {
    /// The descriptor file could not be read.
    #[error("failed to read map descriptor {path:?}")]
    Io {
        /// Path of the descriptor that could not be read.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// A token could not be parsed as an unsigned integer.
    #[error("token {token:?} is not an unsigned integer")]
    InvalidToken {
        /// Offending token text.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The descriptor ended before object count, rows, and columns were read.
    #[error("descriptor header requires object count, rows, and columns")]
    MissingHeader,
    /// The declared grid dimensions exceed the supported maximum.
    #[error(
        "grid of {rows}x{cols} exceeds the supported maximum of {}x{}",
        MAX_GRID_ROWS,
        MAX_GRID_COLS
    )]
    DimensionsTooLarge {
        /// Declared number of rows.
        rows: u32,
        /// Declared number of columns.
        cols: u32,
    },
    /// The descriptor ended before the declared object list was complete.
    #[error("descriptor declares {expected} objects but only {found} are complete")]
    TruncatedObjects {
        /// Number of objects the header declared.
        expected: u32,
        /// Number of complete triples found.
        found: u32,
    },
    /// Content remained after the declared object list.
    #[error("unexpected content {token:?} after the declared object list")]
    TrailingContent {
        /// First token of the trailing content.
        token: String,
    },
    /// An object coordinate lies outside the declared grid.
    #[error("object at ({row}, {col}) lies outside the {rows}x{cols} grid")]
    CoordinateOutOfBounds {
        /// Declared row of the object.
        row: u32,
        /// Declared column of the object.
        col: u32,
        /// Declared number of rows.
        rows: u32,
        /// Declared number of columns.
        cols: u32,
    },
    /// An object triple used a code outside the supported range.
    #[error("object code {code} is not recognized")]
    UnknownObjectCode {
        /// Offending code value.
        code: u32,
    },
    /// A unique entity was declared more than once.
    #[error("descriptor places more than one {kind}")]
    DuplicateEntity {
        /// Entity kind that was duplicated.
        kind: ObjectKind,
    },
    /// A required entity was never declared.
    #[error("descriptor places no {kind}")]
    MissingEntity {
        /// Entity kind that is absent.
        kind: ObjectKind,
    },
    /// Two objects claim the same cell.
    #[error("two objects claim the cell ({row}, {col})")]
    OverlappingObjects {
        /// Row of the cell claimed twice.
        row: u32,
        /// Column of the cell claimed twice.
        col: u32,
    },
}

/// Validated in-memory form of a map descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapDescriptor {
    rows: u32,
    cols: u32,
    chaser: Position,
    agent: Position,
    goal: Position,
    obstacles: Vec<Position>,
}

impl MapDescriptor {
    /// Parses and validates descriptor text.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut tokens = text.split_whitespace();
        let object_count = header_field(tokens.next())?;
        let rows = header_field(tokens.next())?;
        let cols = header_field(tokens.next())?;

        if rows > MAX_GRID_ROWS || cols > MAX_GRID_COLS {
            return Err(MapError::DimensionsTooLarge { rows, cols });
        }

        let mut chaser = None;
        let mut agent = None;
        let mut goal = None;
        let mut obstacles = Vec::new();
        let mut claimed: Vec<Position> = Vec::new();

        for found in 0..object_count {
            let (Some(row), Some(col), Some(code)) = (tokens.next(), tokens.next(), tokens.next())
            else {
                return Err(MapError::TruncatedObjects {
                    expected: object_count,
                    found,
                });
            };
            let row = parse_unsigned(row)?;
            let col = parse_unsigned(col)?;
            let code = parse_unsigned(code)?;

            if row >= rows || col >= cols {
                return Err(MapError::CoordinateOutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                });
            }

            let position = Position::new(row, col);
            if claimed.contains(&position) {
                return Err(MapError::OverlappingObjects { row, col });
            }
            claimed.push(position);

            match code {
                CODE_CHASER => place_unique(&mut chaser, position, ObjectKind::Chaser)?,
                CODE_AGENT => place_unique(&mut agent, position, ObjectKind::Agent)?,
                CODE_GOAL => place_unique(&mut goal, position, ObjectKind::Goal)?,
                CODE_OBSTACLE => obstacles.push(position),
                code => return Err(MapError::UnknownObjectCode { code }),
            }
        }

        if let Some(token) = tokens.next() {
            return Err(MapError::TrailingContent {
                token: token.to_owned(),
            });
        }

        let Some(chaser) = chaser else {
            return Err(MapError::MissingEntity {
                kind: ObjectKind::Chaser,
            });
        };
        let Some(agent) = agent else {
            return Err(MapError::MissingEntity {
                kind: ObjectKind::Agent,
            });
        };
        let Some(goal) = goal else {
            return Err(MapError::MissingEntity {
                kind: ObjectKind::Goal,
            });
        };

        Ok(Self {
            rows,
            cols,
            chaser,
            agent,
            goal,
            obstacles,
        })
    }

    /// Reads and parses the descriptor file at the provided path.
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Declared number of grid rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Declared number of grid columns.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Starting position of the chaser.
    #[must_use]
    pub const fn chaser(&self) -> Position {
        self.chaser
    }

    /// Starting position of the agent.
    #[must_use]
    pub const fn agent(&self) -> Position {
        self.agent
    }

    /// Position of the goal cell.
    #[must_use]
    pub const fn goal(&self) -> Position {
        self.goal
    }

    /// Positions of all declared obstacles.
    #[must_use]
    pub fn obstacles(&self) -> &[Position] {
        &self.obstacles
    }
}

fn header_field(token: Option<&str>) -> Result<u32, MapError> {
    let Some(token) = token else {
        return Err(MapError::MissingHeader);
    };
    parse_unsigned(token)
}

fn parse_unsigned(token: &str) -> Result<u32, MapError> {
    token.parse().map_err(|source| MapError::InvalidToken {
        token: token.to_owned(),
        source,
    })
}

fn place_unique(
    slot: &mut Option<Position>,
    position: Position,
    kind: ObjectKind,
) -> Result<(), MapError> {
    if slot.is_some() {
        return Err(MapError::DuplicateEntity { kind });
    }
    *slot = Some(position);
    Ok(())
}
