use board::{Boards, GameBoard};
use error::BoardError;

pub mod board;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod pos;
pub mod rule;
pub mod transition;

/// A board together with how many generations it has lived through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    boards: Boards,
    generation: u64,
}

impl Game {
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        Ok(Self {
            boards: Boards::new(height, width)?,
            generation: 0,
        })
    }

    pub fn board(&self) -> &GameBoard {
        self.boards.current()
    }

    pub fn boards(&self) -> &Boards {
        &self.boards
    }

    pub fn boards_mut(&mut self) -> &mut Boards {
        &mut self.boards
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Computes the next generation into the scratch buffer and makes it current.
    pub fn tick(&mut self) {
        let (current, scratch) = self.boards.split();
        transition::advance(current, scratch);

        self.boards.swap();
        self.generation += 1;
    }
}
