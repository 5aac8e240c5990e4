#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Snake Maze.
//!
//! The world executes one turn per accepted directional command: the agent
//! attempts its step, the chaser pursues, and the terminal conditions are
//! evaluated, all inside a single [`apply`] call so no caller can observe a
//! partially executed turn.

use snake_maze_core::{Cell, Command, Direction, Event, Mode, Position, WELCOME_BANNER};
use snake_maze_system_pursuit::chase_candidate;

use crate::{
    grid::Grid,
    history::{TurnHistory, TurnRecord},
    map::MapDescriptor,
};

mod grid;
mod history;
pub mod map;

/// Represents the authoritative Snake Maze world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    descriptor: MapDescriptor,
    grid: Grid,
    agent: Position,
    chaser: Position,
    goal: Position,
    history: TurnHistory,
    mode: Mode,
    won: bool,
    lost: bool,
    turns: u64,
}

impl World {
    /// Creates a new world from a validated map descriptor.
    ///
    /// The world starts in [`Mode::MainMenu`]; play begins once an adapter
    /// submits [`Command::Start`].
    #[must_use]
    pub fn from_descriptor(descriptor: MapDescriptor) -> Self {
        let grid = Grid::from_descriptor(&descriptor);
        let agent = descriptor.agent();
        let chaser = descriptor.chaser();
        let goal = descriptor.goal();
        Self {
            banner: WELCOME_BANNER,
            descriptor,
            grid,
            agent,
            chaser,
            goal,
            history: TurnHistory::default(),
            mode: Mode::MainMenu,
            won: false,
            lost: false,
            turns: 0,
        }
    }

    fn reset_board(&mut self) {
        self.grid = Grid::from_descriptor(&self.descriptor);
        self.agent = self.descriptor.agent();
        self.chaser = self.descriptor.chaser();
        self.goal = self.descriptor.goal();
        self.history.clear();
        self.won = false;
        self.lost = false;
        self.turns = 0;
    }

    fn agent_phase(
        &mut self,
        direction: Direction,
        record: &mut TurnRecord,
        out_events: &mut Vec<Event>,
    ) {
        let Some(candidate) = self.agent.step(direction) else {
            out_events.push(Event::MoveRejected { direction });
            return;
        };
        if !self.grid.view().can_occupy(candidate) {
            out_events.push(Event::MoveRejected { direction });
            return;
        }

        record.agent = Some(self.agent);
        let from = self.agent;
        self.grid.set(from, Cell::Empty);
        self.grid.set(candidate, Cell::Agent { facing: direction });
        self.agent = candidate;
        out_events.push(Event::AgentMoved {
            from,
            to: candidate,
            facing: direction,
        });

        if self.agent == self.goal {
            self.won = true;
            out_events.push(Event::GoalReached { cell: self.agent });
        }
    }

    fn chaser_phase(&mut self, record: &mut TurnRecord, out_events: &mut Vec<Event>) {
        let candidate = chase_candidate(self.chaser, self.agent, self.grid.view());
        if self.grid.view().can_occupy(candidate) {
            // A candidate equal to the current position commits as a
            // zero-length step: the marker is repainted and the record still
            // carries the position, so undo rewinds the repaint as well.
            record.chaser = Some(self.chaser);
            let from = self.chaser;
            self.grid.set(from, Cell::Empty);
            self.grid.set(candidate, Cell::Chaser);
            self.chaser = candidate;
            if from != candidate {
                out_events.push(Event::ChaserMoved { from, to: candidate });
            }
        }

        if self.chaser == self.agent {
            self.lost = true;
            out_events.push(Event::AgentCaught { cell: self.chaser });
        }
    }

    fn undo_turn(&mut self, out_events: &mut Vec<Event>) {
        if let Some(record) = self.history.pop() {
            if let Some(previous) = record.agent {
                self.grid.set(self.agent, Cell::Empty);
                self.agent = previous;
                // The rewound marker is always the neutral up facing; undo
                // does not reconstruct the pre-move facing.
                self.grid.set(
                    self.agent,
                    Cell::Agent {
                        facing: Direction::Up,
                    },
                );
            }
            if let Some(previous) = record.chaser {
                self.grid.set(self.chaser, Cell::Empty);
                self.chaser = previous;
                self.grid.set(self.chaser, Cell::Chaser);
            }
            out_events.push(Event::TurnUndone {
                agent: record.agent,
                chaser: record.chaser,
            });
        }
        self.won = false;
        self.lost = false;
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Commands submitted outside their lifecycle mode are ignored without
/// emitting events.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match (world.mode, command) {
        (Mode::MainMenu, Command::Start) => {
            world.mode = Mode::Playing;
            out_events.push(Event::Started);
        }
        (Mode::Playing, Command::Move { direction }) => {
            let mut record = TurnRecord::default();
            world.agent_phase(direction, &mut record, out_events);
            world.chaser_phase(&mut record, out_events);
            if !record.is_empty() {
                world.history.push(record);
                world.turns = world.turns.saturating_add(1);
            }
            if world.won || world.lost {
                world.mode = Mode::GameOver;
            }
        }
        (Mode::Playing, Command::Undo) => {
            world.undo_turn(out_events);
        }
        (Mode::GameOver, Command::Restart) => {
            world.reset_board();
            world.mode = Mode::Playing;
            out_events.push(Event::Restarted);
        }
        _ => {}
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use snake_maze_core::{GridView, Mode, Outcome, Position};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Exposes a read-only view of the dense cell grid.
    #[must_use]
    pub fn grid_view(world: &World) -> GridView<'_> {
        world.grid.view()
    }

    /// Current lifecycle mode of the simulation.
    #[must_use]
    pub fn mode(world: &World) -> Mode {
        world.mode
    }

    /// Current position of the agent.
    #[must_use]
    pub fn agent_position(world: &World) -> Position {
        world.agent
    }

    /// Current position of the chaser.
    #[must_use]
    pub fn chaser_position(world: &World) -> Position {
        world.chaser
    }

    /// Cell the agent must reach to win.
    #[must_use]
    pub fn goal_position(world: &World) -> Position {
        world.goal
    }

    /// Terminal result of the current game, if one was reached.
    ///
    /// Reaching the goal outranks being caught: a turn that sets both flags
    /// reports a win.
    #[must_use]
    pub fn outcome(world: &World) -> Option<Outcome> {
        if world.won {
            Some(Outcome::Won)
        } else if world.lost {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    /// Number of turns that committed at least one step since the last
    /// restart. Undo does not decrement the counter.
    #[must_use]
    pub fn turns_taken(world: &World) -> u64 {
        world.turns
    }

    /// Number of turns currently available to rewind.
    #[must_use]
    pub fn undo_depth(world: &World) -> usize {
        world.history.depth()
    }
}
