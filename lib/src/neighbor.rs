use crate::{error::IndexOutOfRange, grid::Grid, rule::NEIGHBORHOOD_SIZE};

/// Offsets `(dx, dy)` of the Moore neighborhood.
pub const MOORE_OFFSETS: [(isize, isize); NEIGHBORHOOD_SIZE] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count the living neighbors of the cell at `(x, y)`.
///
/// The grid boundary is clipped: neighbors outside the grid count as dead.
/// In particular, a cell on the right edge has no neighbors on the left edge.
///
/// Returns an error if `(x, y)` itself is outside the grid.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> Result<u8, IndexOutOfRange> {
    grid.index_of(x, y)?;
    Ok(count_unchecked(grid, x, y))
}

/// Same as [`count_live_neighbors`], but `(x, y)` must be inside the grid.
pub(crate) fn count_unchecked(grid: &Grid, x: usize, y: usize) -> u8 {
    debug_assert!(grid.contains(x, y));

    let (width, height) = grid.dimensions();
    let mut count = 0;

    for (dx, dy) in MOORE_OFFSETS {
        // Each component is checked on its own. A linear index would wrap to the next row.
        let Some(cx) = x.checked_add_signed(dx).filter(|&cx| cx < width) else {
            continue;
        };
        let Some(cy) = y.checked_add_signed(dy).filter(|&cy| cy < height) else {
            continue;
        };

        if grid.cells[cy * width + cx].is_alive() {
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set(x, y, CellState::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_corner() {
        let grid = grid_with(3, 3, &[(0, 0)]);

        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(0));
        assert_eq!(count_live_neighbors(&grid, 1, 1), Ok(1));
        assert_eq!(count_live_neighbors(&grid, 1, 0), Ok(1));
        assert_eq!(count_live_neighbors(&grid, 2, 2), Ok(0));
    }

    #[test]
    fn test_no_row_wrap() {
        let grid = grid_with(5, 5, &[(0, 2)]);

        assert_eq!(count_live_neighbors(&grid, 4, 1), Ok(0));
        assert_eq!(count_live_neighbors(&grid, 4, 3), Ok(0));
        assert_eq!(count_live_neighbors(&grid, 4, 2), Ok(0));
        assert_eq!(count_live_neighbors(&grid, 1, 1), Ok(1));

        let grid = grid_with(5, 5, &[(4, 2)]);

        assert_eq!(count_live_neighbors(&grid, 0, 1), Ok(0));
        assert_eq!(count_live_neighbors(&grid, 0, 3), Ok(0));
        assert_eq!(count_live_neighbors(&grid, 0, 2), Ok(0));
    }

    #[test]
    fn test_no_vertical_wrap() {
        let grid = grid_with(3, 3, &[(1, 0)]);

        assert_eq!(count_live_neighbors(&grid, 1, 2), Ok(0));
        assert_eq!(count_live_neighbors(&grid, 0, 1), Ok(1));
    }

    #[test]
    fn test_full() {
        let all: Vec<_> = (0..3).flat_map(|y| (0..3).map(move |x| (x, y))).collect();
        let grid = grid_with(3, 3, &all);

        assert_eq!(count_live_neighbors(&grid, 1, 1), Ok(8));
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(3));
        assert_eq!(count_live_neighbors(&grid, 1, 0), Ok(5));
    }

    #[test]
    fn test_single_cell() {
        let grid = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(0));
    }

    #[test]
    fn test_out_of_range() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(count_live_neighbors(&grid, 3, 0).is_err());
        assert!(count_live_neighbors(&grid, 0, 3).is_err());
    }

    #[test]
    fn test_pure() {
        let grid = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2)]);
        let before = grid.clone();
        for y in 0..4 {
            for x in 0..4 {
                count_live_neighbors(&grid, x, y).unwrap();
            }
        }
        assert_eq!(grid, before);
    }
}
