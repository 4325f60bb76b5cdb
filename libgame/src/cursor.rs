use strum::{Display, EnumIter};

use super::{
    board::{Boards, TileState},
    pos::Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The editing cursor. It only ever moves through [`Cursor::step`], which keeps
/// it inside `[0, height) x [0, width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pos: Position,
}

impl Cursor {
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Moves one cell towards `direction`. Stepping off an edge leaves the cursor where it is.
    pub fn step(&mut self, direction: Direction, height: usize, width: usize) {
        let Position { row, col } = &mut self.pos;

        match direction {
            Direction::Up => *row = row.saturating_sub(1),
            Direction::Down => {
                if *row + 1 < height {
                    *row += 1;
                }
            }
            Direction::Left => *col = col.saturating_sub(1),
            Direction::Right => {
                if *col + 1 < width {
                    *col += 1;
                }
            }
        }
    }

    /// Marks the cell under the cursor as just born, so it is drawn and counted like organic growth.
    pub fn toggle_alive(&self, boards: &mut Boards) {
        boards.set(self.pos, TileState::New);
    }

    pub fn toggle_dead(&self, boards: &mut Boards) {
        boards.set(self.pos, TileState::Dead);
    }
}
