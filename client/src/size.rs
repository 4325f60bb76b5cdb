use anyhow::{Context, ensure};

use crate::{config::BoardSizing, renderer::HEADER_ROWS};

/// Columns and rows taken by the border around the board.
const BORDER: usize = 2;

/// Resolves the board dimensions from the sizing policy and the terminal's `(columns, rows)`.
/// A fixed board must fit the same area a viewport-sized board would fill.
pub fn board_size(sizing: BoardSizing, terminal: (u16, u16)) -> anyhow::Result<(usize, usize)> {
    let (columns, rows) = (terminal.0 as usize, terminal.1 as usize);
    let room = (
        rows.saturating_sub(BORDER + HEADER_ROWS),
        columns.saturating_sub(BORDER),
    );

    ensure!(
        room.0 > 0 && room.1 > 0,
        "terminal of {columns}x{rows} is too small for a board"
    );

    match sizing {
        BoardSizing::Viewport => Ok(room),
        BoardSizing::Fixed { height, width } => {
            ensure!(
                height > 0 && width > 0,
                "fixed board must be at least 1x1, got {height}x{width}"
            );
            ensure!(
                height <= room.0 && width <= room.1,
                "fixed board of {height}x{width} does not fit a terminal of {columns}x{rows} \
                 (at most {}x{})",
                room.0,
                room.1
            );
            Ok((height, width))
        }
    }
}

pub fn measure(sizing: BoardSizing) -> anyhow::Result<(usize, usize)> {
    let terminal = crossterm::terminal::size().context("Measuring terminal")?;

    board_size(sizing, terminal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_leaves_room_for_border_and_header() {
        assert_eq!(board_size(BoardSizing::Viewport, (80, 24)).unwrap(), (18, 78));
    }

    #[test]
    fn fixed_inside_terminal_is_kept() {
        let sizing = BoardSizing::Fixed {
            height: 5,
            width: 7,
        };

        assert_eq!(board_size(sizing, (80, 24)).unwrap(), (5, 7));
    }

    #[test]
    fn fixed_may_fill_the_viewport_exactly() {
        let sizing = BoardSizing::Fixed {
            height: 18,
            width: 78,
        };

        assert_eq!(board_size(sizing, (80, 24)).unwrap(), (18, 78));
    }

    #[test]
    fn fixed_larger_than_terminal_is_an_error() {
        let too_tall = BoardSizing::Fixed {
            height: 19,
            width: 10,
        };
        let too_wide = BoardSizing::Fixed {
            height: 10,
            width: 79,
        };
        let huge = BoardSizing::Fixed {
            height: 70_000,
            width: 1,
        };

        assert!(board_size(too_tall, (80, 24)).is_err());
        assert!(board_size(too_wide, (80, 24)).is_err());
        assert!(board_size(huge, (u16::MAX, u16::MAX)).is_err());
    }

    #[test]
    fn tiny_terminal_is_an_error() {
        assert!(board_size(BoardSizing::Viewport, (2, 30)).is_err());
        assert!(board_size(BoardSizing::Viewport, (30, 6)).is_err());
        assert_eq!(board_size(BoardSizing::Viewport, (3, 7)).unwrap(), (1, 1));

        let fixed = BoardSizing::Fixed {
            height: 1,
            width: 1,
        };
        assert!(board_size(fixed, (2, 30)).is_err());
    }
}
