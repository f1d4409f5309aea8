use crate::{cell::CellState, error::ConfigError, grid::Grid};
use rand::{seq::index, Rng};

/// How to choose the living cells of the first generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeedPolicy {
    /// Each cell is alive independently with the given probability.
    Bernoulli(f64),

    /// Exactly this many distinct cells are alive.
    FixedCount(usize),
}

impl SeedPolicy {
    /// Check that the policy can be applied to a grid with `cells` cells.
    pub fn check(self, cells: usize) -> Result<Self, ConfigError> {
        match self {
            Self::Bernoulli(p) if !(0.0..=1.0).contains(&p) => {
                Err(ConfigError::InvalidProbability(p))
            }
            Self::FixedCount(count) if count > cells => {
                Err(ConfigError::TooManyCells { count, cells })
            }
            _ => Ok(self),
        }
    }
}

/// Populate `grid` according to `policy`.
///
/// Every cell is reset first, so afterwards the living cells are exactly those chosen by the
/// policy. The random number generator is borrowed, so a seeded generator gives a reproducible
/// grid.
///
/// On error the grid is left untouched.
///
/// # Example
///
/// ```
/// use lifegrid_lib::{seed, Grid, SeedPolicy};
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
///
/// let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
/// let mut grid = Grid::new(4, 4).unwrap();
///
/// seed(&mut grid, SeedPolicy::FixedCount(5), &mut rng).unwrap();
/// assert_eq!(grid.population(), 5);
///
/// assert!(seed(&mut grid, SeedPolicy::FixedCount(20), &mut rng).is_err());
/// ```
pub fn seed<R: Rng + ?Sized>(
    grid: &mut Grid,
    policy: SeedPolicy,
    rng: &mut R,
) -> Result<(), ConfigError> {
    policy.check(grid.len())?;
    grid.clear();

    match policy {
        SeedPolicy::Bernoulli(p) => {
            for cell in &mut grid.cells {
                *cell = rng.gen_bool(p).into();
            }
        }
        SeedPolicy::FixedCount(count) => {
            // Sampling indices without replacement never picks the same cell twice.
            for i in index::sample(rng, grid.len(), count) {
                grid.cells[i] = CellState::Alive;
            }
        }
    }

    log::info!(
        "Seeded a {}x{} grid with {:?}: {} living cells",
        grid.width(),
        grid.height(),
        policy,
        grid.population()
    );

    Ok(())
}
