use super::board::TileState;

/// Conway's B3/S23, tagging every change with a transient state.
///
/// Survivors always come out as `Alive` and dead cells that stay dead as `Dead`,
/// which is what lets `New` and `Dying` fade after a single generation.
pub fn next_state(tile: TileState, alive_neighbors: usize) -> TileState {
    if tile.is_alive() {
        match alive_neighbors {
            2 | 3 => TileState::Alive,
            _ => TileState::Dying,
        }
    } else {
        match alive_neighbors {
            3 => TileState::New,
            _ => TileState::Dead,
        }
    }
}
