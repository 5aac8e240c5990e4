//! ASCII board rendering for the console adapter.

use snake_maze_core::{Cell, Direction, GridView, Position};

const GLYPH_WALL: char = '#';
const GLYPH_EMPTY: char = ' ';
const GLYPH_OBSTACLE: char = 'O';
const GLYPH_GOAL: char = 'X';
const GLYPH_CHASER: char = '~';
const GLYPH_AGENT_UP: char = '^';
const GLYPH_AGENT_DOWN: char = 'v';
const GLYPH_AGENT_LEFT: char = '<';
const GLYPH_AGENT_RIGHT: char = '>';

/// Renders the grid into a newline-terminated block of glyph rows.
pub(crate) fn render(view: GridView<'_>) -> String {
    let (rows, cols) = view.dimensions();
    let mut board = String::with_capacity((cols as usize + 1) * rows as usize);
    for row in 0..rows {
        for col in 0..cols {
            let cell = view.cell(Position::new(row, col)).unwrap_or(Cell::Empty);
            board.push(glyph(cell));
        }
        board.push('\n');
    }
    board
}

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => GLYPH_EMPTY,
        Cell::Wall => GLYPH_WALL,
        Cell::Obstacle => GLYPH_OBSTACLE,
        Cell::Goal => GLYPH_GOAL,
        Cell::Chaser => GLYPH_CHASER,
        Cell::Agent { facing } => match facing {
            Direction::Up => GLYPH_AGENT_UP,
            Direction::Down => GLYPH_AGENT_DOWN,
            Direction::Left => GLYPH_AGENT_LEFT,
            Direction::Right => GLYPH_AGENT_RIGHT,
        },
    }
}
