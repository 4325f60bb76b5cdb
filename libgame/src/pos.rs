#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a signed offset, returning `None` when either coordinate would go negative.
    /// The upper bound is the board's concern.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(value: Position) -> Self {
        (value.row, value.col)
    }
}
