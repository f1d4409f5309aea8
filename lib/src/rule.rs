use crate::cell::CellState;

/// The rule string of Conway's Game of Life, in B/S notation.
pub const RULE_NAME: &str = "B3/S23";

/// Number of cells in the Moore neighborhood.
pub const NEIGHBORHOOD_SIZE: usize = 8;

/// The transition table of Conway's Game of Life.
///
/// `TABLE[state][n]` is the next state of a cell in `state` with `n` living neighbors.
/// Row 0 is for dead cells, row 1 for living cells.
const TABLE: [[CellState; NEIGHBORHOOD_SIZE + 1]; 2] = {
    use CellState::{Alive as A, Dead as D};
    [
        // Birth with exactly 3 living neighbors.
        [D, D, D, A, D, D, D, D, D],
        // Survival with 2 or 3 living neighbors.
        [D, D, A, A, D, D, D, D, D],
    ]
};

/// The next state of a cell in `state` with `alive_neighbors` living neighbors.
///
/// - A living cell with fewer than 2 living neighbors dies.
/// - A living cell with 2 or 3 living neighbors survives.
/// - A living cell with more than 3 living neighbors dies.
/// - A dead cell with exactly 3 living neighbors becomes alive.
///
/// Counts above 8 cannot occur in a Moore neighborhood and are treated as overcrowding.
#[inline]
pub const fn successor(state: CellState, alive_neighbors: u8) -> CellState {
    let n = alive_neighbors as usize;
    if n > NEIGHBORHOOD_SIZE {
        return CellState::Dead;
    }
    TABLE[state.is_alive() as usize][n]
}
