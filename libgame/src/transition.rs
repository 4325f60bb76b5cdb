use super::{
    board::{GameBoard, TileState},
    pos::Position,
    rule,
};

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Cells in the Moore neighborhood of `pos` that exist on the board.
/// The edges are hard: corners have 3 neighbors and other border cells 5.
pub fn neighbors(board: &GameBoard, pos: Position) -> impl Iterator<Item = &TileState> {
    NEIGHBOR_RELATIVE_POSITIONS
        .iter()
        .filter_map(move |[d_row, d_col]| board.tile(pos.offset(*d_row, *d_col)?))
}

pub fn neighbor_count(board: &GameBoard, pos: Position) -> usize {
    neighbors(board, pos).filter(|tile| tile.is_alive()).count()
}

/// Writes the generation after `current` into `scratch`.
///
/// Only `current` is ever read, so the result does not depend on what `scratch`
/// held before. Both boards must have the same dimensions.
pub fn advance(current: &GameBoard, scratch: &mut GameBoard) {
    debug_assert_eq!(
        (current.height, current.width),
        (scratch.height, scratch.width)
    );

    for (pos, tile) in current.enumerate_tiles() {
        let next = rule::next_state(*tile, neighbor_count(current, pos));

        if let Some(slot) = scratch.tile_mut(pos) {
            *slot = next;
        }
    }
}
