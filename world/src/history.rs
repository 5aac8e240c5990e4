//! Undo history for completed turns.

use snake_maze_core::Position;

/// Positions captured before each entity's committed step in a single turn.
///
/// A `None` entry marks an entity that committed nothing that turn; one
/// record rewinds both entities in lockstep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TurnRecord {
    /// Agent position before its committed move, when it moved.
    pub(crate) agent: Option<Position>,
    /// Chaser position before its committed step, when it stepped.
    pub(crate) chaser: Option<Position>,
}

impl TurnRecord {
    /// Reports whether neither entity committed a step this turn.
    pub(crate) const fn is_empty(&self) -> bool {
        self.agent.is_none() && self.chaser.is_none()
    }
}

/// LIFO stack of turn records backing the undo command.
#[derive(Clone, Debug, Default)]
pub(crate) struct TurnHistory {
    records: Vec<TurnRecord>,
}

impl TurnHistory {
    /// Pushes a completed turn, discarding records where nothing committed.
    pub(crate) fn push(&mut self, record: TurnRecord) {
        if !record.is_empty() {
            self.records.push(record);
        }
    }

    /// Pops the most recently recorded turn.
    pub(crate) fn pop(&mut self) -> Option<TurnRecord> {
        self.records.pop()
    }

    /// Number of turns currently available to rewind.
    pub(crate) fn depth(&self) -> usize {
        self.records.len()
    }

    /// Drops all recorded turns.
    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}
