//! Dense cell storage used by the world crate.

use snake_maze_core::{Cell, Direction, GridView, Position};

use crate::map::MapDescriptor;

/// Dense row-major grid of cells with a forced wall border.
///
/// The border is written after object placement, so a descriptor may legally
/// park an entity on the border: its marker is overwritten by the wall while
/// its tracked position is retained by the world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds the playable grid from a validated descriptor.
    pub(crate) fn from_descriptor(descriptor: &MapDescriptor) -> Self {
        let rows = descriptor.rows();
        let cols = descriptor.cols();
        let mut grid = Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows as usize * cols as usize],
        };

        grid.set(descriptor.chaser(), Cell::Chaser);
        grid.set(
            descriptor.agent(),
            Cell::Agent {
                facing: Direction::Up,
            },
        );
        grid.set(descriptor.goal(), Cell::Goal);
        for &obstacle in descriptor.obstacles() {
            grid.set(obstacle, Cell::Obstacle);
        }

        grid.force_border_walls();
        grid
    }

    /// Writes the provided cell, ignoring out-of-range positions.
    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        if let Some(slot) = self
            .index(position)
            .and_then(|index| self.cells.get_mut(index))
        {
            *slot = cell;
        }
    }

    /// Captures the read-only view shared with systems and adapters.
    pub(crate) fn view(&self) -> GridView<'_> {
        GridView::new(&self.cells, self.rows, self.cols)
    }

    fn force_border_walls(&mut self) {
        let last_row = self.rows.saturating_sub(1);
        let last_col = self.cols.saturating_sub(1);
        for row in 0..self.rows {
            self.set(Position::new(row, 0), Cell::Wall);
            self.set(Position::new(row, last_col), Cell::Wall);
        }
        for col in 0..self.cols {
            self.set(Position::new(0, col), Cell::Wall);
            self.set(Position::new(last_row, col), Cell::Wall);
        }
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
