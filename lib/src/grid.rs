use crate::{
    cell::CellState,
    error::{ConfigError, IndexOutOfRange},
    rule::RULE_NAME,
};
use std::fmt::{self, Display, Formatter, Write};

/// Maximal length of a line in the RLE output, not counting the newline.
const RLE_LINE_WIDTH: usize = 70;

/// A fixed-size rectangular grid of cells.
///
/// Cells are stored in row-major order: the cell at `(x, y)` has the linear index
/// `y * width + x`.
///
/// Cells outside the grid do not exist. Neighbor counting treats them as permanently dead.
///
/// # Example
///
/// ```
/// use lifegrid_lib::{CellState, Grid};
///
/// let mut grid = Grid::new(4, 3).unwrap();
/// grid.set(1, 2, CellState::Alive).unwrap();
/// assert_eq!(grid.get_index(9), Ok(CellState::Alive));
/// assert!(grid.get(4, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Width of the grid.
    width: usize,

    /// Height of the grid.
    height: usize,

    /// The cells, row by row.
    pub(crate) cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid where every cell is dead.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidSize);
        }

        let len = width.checked_mul(height).ok_or(ConfigError::InvalidSize)?;

        Ok(Self {
            width,
            height,
            cells: vec![CellState::Dead; len],
        })
    }

    /// A grid of the same dimensions where every cell is dead.
    pub(crate) fn dead_copy(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![CellState::Dead; self.cells.len()],
        }
    }

    /// Width and height of the grid.
    #[inline]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Width of the grid.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A grid always has at least one cell, so this is always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether two grids have the same dimensions.
    #[inline]
    pub const fn same_dimensions(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Whether `(x, y)` is a cell of the grid.
    #[inline]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Convert coordinates to a linear index.
    pub const fn index_of(&self, x: usize, y: usize) -> Result<usize, IndexOutOfRange> {
        if self.contains(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(IndexOutOfRange::Coord {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Convert a linear index to coordinates.
    pub fn coord_of(&self, index: usize) -> Result<(usize, usize), IndexOutOfRange> {
        self.check_index(index)?;
        Ok((index % self.width, index / self.width))
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index < self.len() {
            Ok(())
        } else {
            Err(IndexOutOfRange::Index {
                index,
                len: self.len(),
            })
        }
    }

    /// Get the state of the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, IndexOutOfRange> {
        let index = self.index_of(x, y)?;
        Ok(self.cells[index])
    }

    /// Get the state of the cell with the given linear index.
    pub fn get_index(&self, index: usize) -> Result<CellState, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(self.cells[index])
    }

    /// Set the state of the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), IndexOutOfRange> {
        let index = self.index_of(x, y)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Set the state of the cell with the given linear index.
    pub fn set_index(&mut self, index: usize, state: CellState) -> Result<(), IndexOutOfRange> {
        self.check_index(index)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Whether the cell at `(x, y)` is alive.
    ///
    /// Cells outside the grid are reported as dead. Hosts drawing the grid can use this
    /// without handling errors.
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && self.cells[y * self.width + x].is_alive()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of all living cells, in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i % width, i / width))
    }

    /// The cells of row `y`.
    pub(crate) fn row(&self, y: usize) -> &[CellState] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// The grid in the [RLE format](https://conwaylife.com/wiki/Run_Length_Encoded).
    ///
    /// Trailing dead cells of a row are omitted, and consecutive empty rows are
    /// merged into a single run of `$`.
    pub fn rle(&self) -> String {
        let mut rle = Rle::default();

        // Pending end-of-rows, written lazily so that trailing empty rows disappear.
        let mut pending_rows = 0;

        for y in 0..self.height {
            let row = self.row(y);
            let Some(last_alive) = row.iter().rposition(|c| c.is_alive()) else {
                pending_rows += 1;
                continue;
            };

            if pending_rows > 0 {
                rle.push_run(pending_rows, '$');
                pending_rows = 0;
            }

            let mut x = 0;
            while x <= last_alive {
                let state = row[x];
                let run = row[x..=last_alive]
                    .iter()
                    .take_while(|&&c| c == state)
                    .count();
                rle.push_run(run, if state.is_alive() { 'o' } else { 'b' });
                x += run;
            }

            pending_rows += 1;
        }

        rle.push_run(1, '!');

        format!(
            "x = {}, y = {}, rule = {}\n{}",
            self.width,
            self.height,
            RULE_NAME,
            rle.finish()
        )
    }
}

/// A helper to build the body of an RLE string with wrapped lines.
#[derive(Debug, Default)]
struct Rle {
    /// Finished lines.
    lines: Vec<String>,

    /// The line being written.
    current: String,
}

impl Rle {
    fn push_run(&mut self, run: usize, tag: char) {
        let item = if run == 1 {
            tag.to_string()
        } else {
            format!("{run}{tag}")
        };

        if self.current.len() + item.len() > RLE_LINE_WIDTH {
            self.lines.push(std::mem::take(&mut self.current));
        }
        self.current.push_str(&item);
    }

    fn finish(mut self) -> String {
        self.lines.push(self.current);
        let mut s = self.lines.join("\n");
        s.push('\n');
        s
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for &cell in self.row(y) {
                f.write_char(if cell.is_alive() { 'o' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.population(), 0);

        assert_eq!(Grid::new(0, 2), Err(ConfigError::InvalidSize));
        assert_eq!(Grid::new(2, 0), Err(ConfigError::InvalidSize));
        assert_eq!(Grid::new(usize::MAX, 2), Err(ConfigError::InvalidSize));
    }

    #[test]
    fn test_index_coord_bijection() {
        let grid = Grid::new(5, 3).unwrap();

        for index in 0..grid.len() {
            let (x, y) = grid.coord_of(index).unwrap();
            assert!(grid.contains(x, y));
            assert_eq!(grid.index_of(x, y), Ok(index));
        }

        assert_eq!(grid.index_of(4, 2), Ok(14));
        assert_eq!(grid.coord_of(7), Ok((2, 1)));
    }

    #[test]
    fn test_out_of_range() {
        let mut grid = Grid::new(4, 4).unwrap();

        assert_eq!(
            grid.get(4, 0),
            Err(IndexOutOfRange::Coord {
                x: 4,
                y: 0,
                width: 4,
                height: 4
            })
        );
        assert!(grid.get(0, 4).is_err());
        assert_eq!(
            grid.get_index(16),
            Err(IndexOutOfRange::Index { index: 16, len: 16 })
        );
        assert!(grid.set(7, 1, CellState::Alive).is_err());
        assert!(grid.set_index(100, CellState::Alive).is_err());
        assert!(grid.coord_of(16).is_err());

        // Failed writes do not touch the grid.
        assert_eq!(grid.population(), 0);
        assert!(!grid.is_alive(4, 0));
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(4, 3).unwrap();

        grid.set(3, 0, CellState::Alive).unwrap();
        grid.set_index(4, CellState::Alive).unwrap();

        assert_eq!(grid.get(3, 0), Ok(CellState::Alive));
        assert_eq!(grid.get(0, 1), Ok(CellState::Alive));
        assert_eq!(grid.get_index(3), Ok(CellState::Alive));
        // The end of row 0 is not the start of row 1.
        assert_eq!(grid.get(2, 0), Ok(CellState::Dead));
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), [(3, 0), (0, 1)]);

        grid.set(3, 0, CellState::Dead).unwrap();
        assert_eq!(grid.population(), 1);

        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(1, 0, CellState::Alive).unwrap();
        grid.set(2, 1, CellState::Alive).unwrap();

        assert_eq!(grid.to_string(), ".o.\n..o\n");
    }

    #[test]
    fn test_rle() {
        // A glider.
        let mut grid = Grid::new(5, 5).unwrap();
        for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            grid.set(x, y, CellState::Alive).unwrap();
        }

        assert_eq!(grid.rle(), "x = 5, y = 5, rule = B3/S23\nbo$2bo$3o!\n");

        let empty = Grid::new(2, 2).unwrap();
        assert_eq!(empty.rle(), "x = 2, y = 2, rule = B3/S23\n!\n");

        let mut gap = Grid::new(2, 4).unwrap();
        gap.set(0, 0, CellState::Alive).unwrap();
        gap.set(1, 3, CellState::Alive).unwrap();
        assert_eq!(gap.rle(), "x = 2, y = 4, rule = B3/S23\no3$bo!\n");
    }

    #[test]
    fn test_rle_line_width() {
        let mut grid = Grid::new(200, 1).unwrap();
        for x in (0..200).step_by(2) {
            grid.set(x, 0, CellState::Alive).unwrap();
        }

        let rle = grid.rle();
        assert!(rle.lines().all(|line| line.len() <= RLE_LINE_WIDTH));
        let body: String = rle.lines().skip(1).collect();
        assert_eq!(body, format!("{}o!", "ob".repeat(99)));
    }
}
