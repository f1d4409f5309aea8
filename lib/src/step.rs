use crate::{
    cell::CellState, error::ConfigError, grid::Grid, neighbor::count_unchecked, rule::successor,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compute the next generation of `current` as a new grid.
///
/// `current` is only read. Every cell of the result is computed from `current` alone,
/// so the result does not depend on the order in which cells are visited.
///
/// # Example
///
/// ```
/// use lifegrid_lib::{step, CellState, Grid};
///
/// // A blinker.
/// let mut grid = Grid::new(3, 3).unwrap();
/// for x in 0..3 {
///     grid.set(x, 1, CellState::Alive).unwrap();
/// }
///
/// let next = step(&grid);
/// assert_eq!(next.alive_cells().collect::<Vec<_>>(), [(1, 0), (1, 1), (1, 2)]);
/// assert_eq!(step(&next), grid);
/// ```
pub fn step(current: &Grid) -> Grid {
    let mut next = current.dead_copy();
    fill_next(current, &mut next.cells);
    next
}

/// Compute the next generation of `current` into `next`.
///
/// `next` is overwritten entirely. It must have the same dimensions as `current`.
pub fn step_into(current: &Grid, next: &mut Grid) -> Result<(), ConfigError> {
    if !current.same_dimensions(next) {
        return Err(ConfigError::DimensionMismatch);
    }

    advance(current, next);
    Ok(())
}

/// Same as [`step_into`], but the dimensions must already match.
pub(crate) fn advance(current: &Grid, next: &mut Grid) {
    debug_assert!(current.same_dimensions(next));
    next.clear();
    fill_next(current, &mut next.cells);
}

/// Compute the next state of every row of `current`, writing it to the matching row of `next`.
fn step_row(current: &Grid, y: usize, row: &mut [CellState]) {
    for (x, (cell, &state)) in row.iter_mut().zip(current.row(y)).enumerate() {
        *cell = successor(state, count_unchecked(current, x, y));
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_next(current: &Grid, next: &mut [CellState]) {
    fill_serial(current, next);
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn fill_serial(current: &Grid, next: &mut [CellState]) {
    for (y, row) in next.chunks_mut(current.width()).enumerate() {
        step_row(current, y, row);
    }
}

/// Rows are independent: each worker reads `current` and writes only its own row.
#[cfg(feature = "parallel")]
fn fill_next(current: &Grid, next: &mut [CellState]) {
    next.par_chunks_mut(current.width())
        .enumerate()
        .for_each(|(y, row)| step_row(current, y, row));
}

/// Compute the next generation on a single thread, regardless of the `parallel` feature.
#[cfg(test)]
fn step_serial(current: &Grid) -> Grid {
    let mut next = current.dead_copy();
    fill_serial(current, &mut next.cells);
    next
}
