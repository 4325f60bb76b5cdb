use itertools::Itertools;
use rand::Rng;
use strum::Display;

use super::{error::BoardError, pos::Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    pub height: usize,
    pub width: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        if height == 0 || width == 0 {
            return Err(BoardError::EmptyDimension { height, width });
        }

        let cells = height
            .checked_mul(width)
            .ok_or(BoardError::TooLarge { height, width })?;

        Ok(Self {
            height,
            width,
            tiles: vec![TileState::default(); cells],
        })
    }

    /// Replaces the whole board with `alive_cells` freshly born cells at random positions.
    /// Asking for more cells than the board holds fills it completely.
    pub fn randomize<R>(&mut self, rng: &mut R, alive_cells: usize)
    where
        R: Rng,
    {
        self.clear();

        let mut available_positions = (0..self.height)
            .cartesian_product(0..self.width)
            .map(Position::from)
            .collect_vec();

        for _ in 0..alive_cells.min(available_positions.len()) {
            let chosen_index = rng.random_range(0..available_positions.len());
            let chosen_position = available_positions.swap_remove(chosen_index);

            if let Some(tile) = self.tile_mut(chosen_position) {
                *tile = TileState::New;
            }
        }
    }

    pub fn clear(&mut self) {
        self.tiles.fill(TileState::Dead);
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        self.tiles.chunks_exact(self.width)
    }

    pub fn alive_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    #[cfg(test)]
    pub(crate) fn tiles_mut(&mut self) -> &mut [TileState] {
        &mut self.tiles
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.height || col >= self.width {
            return None;
        }

        Some(col + row * self.width)
    }

    pub(crate) fn index_to_pos(&self, index: usize) -> Position {
        Position {
            row: index / self.width,
            col: index % self.width,
        }
    }
}

/// `New` and `Dying` only mark what changed in the last generation. For the rule,
/// `New` counts as alive and `Dying` as dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TileState {
    Alive,
    New,
    Dying,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        matches!(self, TileState::Alive | TileState::New)
    }
}

/// The current generation plus the buffer the next one is written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boards {
    buffers: [GameBoard; 2],
    current: usize,
}

impl Boards {
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        let board = GameBoard::new(height, width)?;

        Ok(Self {
            buffers: [board.clone(), board],
            current: 0,
        })
    }

    pub fn height(&self) -> usize {
        self.current().height
    }

    pub fn width(&self) -> usize {
        self.current().width
    }

    pub fn current(&self) -> &GameBoard {
        &self.buffers[self.current]
    }

    pub fn current_mut(&mut self) -> &mut GameBoard {
        &mut self.buffers[self.current]
    }

    pub fn get<P>(&self, pos: P) -> Option<TileState>
    where
        P: Into<Position>,
    {
        self.current().tile(pos).copied()
    }

    /// Writes into the current generation. Returns `false` if `pos` is off the board.
    pub fn set<P>(&mut self, pos: P, state: TileState) -> bool
    where
        P: Into<Position>,
    {
        match self.current_mut().tile_mut(pos) {
            Some(tile) => {
                *tile = state;
                true
            }
            None => false,
        }
    }

    /// Borrows the current generation for reading and the scratch buffer for writing.
    pub fn split(&mut self) -> (&GameBoard, &mut GameBoard) {
        let [first, second] = &mut self.buffers;

        if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    pub fn swap(&mut self) {
        self.current ^= 1;
    }
}
