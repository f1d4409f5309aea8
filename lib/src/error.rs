use thiserror::Error;

/// An error that can occur when building a grid, checking a configuration, or seeding.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The width or height is zero, or the number of cells overflows.
    #[error("The width or height is zero, or the grid is too large")]
    InvalidSize,

    /// More cells are requested to be alive than the grid holds.
    #[error("Cannot seed {count} living cells in a grid of {cells} cells")]
    TooManyCells {
        /// Number of requested living cells.
        count: usize,
        /// Number of cells in the grid.
        cells: usize,
    },

    /// The probability of a cell being alive is not in `[0, 1]`.
    #[error("The probability {0} is not between 0 and 1")]
    InvalidProbability(f64),

    /// Two grids that should have the same size do not.
    #[error("The grids have different dimensions")]
    DimensionMismatch,
}

/// A coordinate or a linear index outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IndexOutOfRange {
    /// The coordinates `(x, y)` are outside the grid.
    #[error("The cell ({x}, {y}) is outside a {width}x{height} grid")]
    Coord {
        /// Horizontal coordinate.
        x: usize,
        /// Vertical coordinate.
        y: usize,
        /// Width of the grid.
        width: usize,
        /// Height of the grid.
        height: usize,
    },

    /// The linear index is outside the grid.
    #[error("The index {index} is outside a grid of {len} cells")]
    Index {
        /// Linear index.
        index: usize,
        /// Number of cells in the grid.
        len: usize,
    },
}

/// An error that can occur when the simulation is driven in the wrong order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// The simulation was stepped before it was seeded.
    #[error("The grid must be seeded before it is stepped")]
    NotSeeded,
}

/// Any error produced by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// See [`IndexOutOfRange`].
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRange),

    /// See [`StateError`].
    #[error(transparent)]
    State(#[from] StateError),
}
