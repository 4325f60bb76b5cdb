use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must have at least one row and one column, got {height}x{width}")]
    EmptyDimension { height: usize, width: usize },

    #[error("board of {height}x{width} cells is too large")]
    TooLarge { height: usize, width: usize },
}
