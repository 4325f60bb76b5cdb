use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};
use libgame::{board::TileState, controller::Snapshot};

/// Status lines drawn above the board, inside the border.
pub const HEADER_ROWS: usize = 4;

const DOT: char = '⊡';
const SQUARE: char = '▣';
const HOLLOW: char = '□';

const BORDER_COLOR: Color = Color::AnsiValue(8);

/// Last row crossterm can address; `MoveTo` works with 1-based `u16` internally.
const LAST_SCREEN_ROW: u16 = u16::MAX - 1;

pub fn glyph(tile: TileState) -> (char, Color) {
    match tile {
        TileState::Alive => (DOT, Color::AnsiValue(45)),
        TileState::New => (DOT, Color::AnsiValue(77)),
        TileState::Dying => (HOLLOW, Color::AnsiValue(124)),
        TileState::Dead => (HOLLOW, Color::AnsiValue(8)),
    }
}

pub const CURSOR_GLYPH: (char, Color) = (SQUARE, Color::AnsiValue(7));

pub fn header(snapshot: &Snapshot) -> [String; HEADER_ROWS] {
    let cursor_cell = snapshot
        .cursor_tile
        .map_or_else(|| "UNKNOWN".to_owned(), |tile| tile.to_string());

    [
        format!("Cursor: ({}, {})", snapshot.cursor.row, snapshot.cursor.col),
        format!("Cursor Cell: {cursor_cell}"),
        format!("Tick: {}", snapshot.generation),
        format!("State: {}", snapshot.state),
    ]
}

/// Paints one full frame. Nothing is shown but a loading line until the board exists.
/// Board rows past the last addressable screen row are not drawn.
pub fn draw<W>(out: &mut W, snapshot: &Snapshot) -> std::io::Result<()>
where
    W: Write,
{
    queue!(out, BeginSynchronizedUpdate, Clear(ClearType::All), MoveTo(0, 0))?;

    let Some(board) = snapshot.board else {
        queue!(out, Print("Loading..."), EndSynchronizedUpdate)?;
        return out.flush();
    };

    let header = header(snapshot);
    let inner_width = header
        .iter()
        .map(|line| line.chars().count())
        .chain([board.width])
        .max()
        .unwrap_or(board.width);

    let cursor: (usize, usize) = snapshot.cursor.into();
    let visible_rows = usize::from(LAST_SCREEN_ROW) - 1 - HEADER_ROWS;
    let mut row: u16 = 0;
    let horizontal = "─".repeat(inner_width);

    queue!(
        out,
        SetForegroundColor(BORDER_COLOR),
        Print(format!("┌{horizontal}┐"))
    )?;
    row += 1;

    for line in &header {
        queue!(
            out,
            MoveTo(0, row),
            SetForegroundColor(BORDER_COLOR),
            Print('│'),
            ResetColor,
            Print(format!("{line:<inner_width$}")),
            SetForegroundColor(BORDER_COLOR),
            Print('│')
        )?;
        row += 1;
    }

    for (y, tiles) in board.rows().take(visible_rows).enumerate() {
        queue!(
            out,
            MoveTo(0, row),
            SetForegroundColor(BORDER_COLOR),
            Print('│')
        )?;

        for (x, tile) in tiles.iter().enumerate() {
            let (ch, color) = if (y, x) == cursor {
                CURSOR_GLYPH
            } else {
                glyph(*tile)
            };

            queue!(out, SetForegroundColor(color), Print(ch))?;
        }

        queue!(
            out,
            Print(" ".repeat(inner_width - board.width)),
            SetForegroundColor(BORDER_COLOR),
            Print('│')
        )?;
        row += 1;
    }

    queue!(
        out,
        MoveTo(0, row),
        SetForegroundColor(BORDER_COLOR),
        Print(format!("└{horizontal}┘")),
        ResetColor,
        EndSynchronizedUpdate
    )?;

    out.flush()
}
