use crate::{
    config::Config,
    error::{ConfigError, StateError},
    grid::Grid,
    seed::{seed, SeedPolicy},
    step::advance,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Lifecycle of a [`Life`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No generation has been established yet.
    #[default]
    Uninitialized,
    /// Generation 0 is established, and has not been stepped.
    Seeded,
    /// At least one step has been taken.
    Running,
}

/// A running Game of Life.
///
/// It owns two grids of the same size. The current generation is read from one of them
/// while the next one is written into the other, and then their roles are swapped.
/// Stepping therefore never allocates.
///
/// # Example
///
/// ```
/// use lifegrid_lib::{Config, Life, Phase};
///
/// let config = Config::new(16, 16).with_count(40).with_seed(1);
/// let mut life = Life::new(config).unwrap();
///
/// // The grid must be seeded before it can be stepped.
/// assert!(life.step().is_err());
///
/// life.seed().unwrap();
/// assert_eq!(life.grid().population(), 40);
///
/// life.step().unwrap();
/// assert_eq!(life.generation(), 1);
/// assert_eq!(life.phase(), Phase::Running);
/// ```
#[derive(Debug, Clone)]
pub struct Life {
    /// The configuration.
    config: Config,

    /// The current generation.
    current: Grid,

    /// Buffer for the next generation.
    ///
    /// Its content is meaningless between steps.
    next: Grid,

    /// Random number generator for seeding.
    rng: Xoshiro256PlusPlus,

    /// Lifecycle state.
    phase: Phase,

    /// Number of steps since the grid was seeded.
    generation: u64,
}

impl Life {
    /// Create a new simulation from a configuration.
    ///
    /// The grid is all dead, and must be seeded before it is stepped.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let config = config.check()?;

        let current = Grid::new(config.width, config.height)?;
        let next = current.clone();

        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };

        log::info!(
            "Created a {}x{} grid, seeding policy: {}",
            config.width,
            config.height,
            config.kind
        );

        Ok(Self {
            config,
            current,
            next,
            rng,
            phase: Phase::Uninitialized,
            generation: 0,
        })
    }

    /// The configuration.
    #[inline]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The current generation.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.current
    }

    /// Lifecycle state.
    #[inline]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of steps since the grid was seeded.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Establish generation 0 from the configured policy and the owned random number generator.
    ///
    /// Seeding again restarts the simulation with a new first generation, drawn from
    /// the continuing random stream.
    pub fn seed(&mut self) -> Result<(), ConfigError> {
        let policy = self.config.policy();
        seed(&mut self.current, policy, &mut self.rng)?;
        self.start();
        Ok(())
    }

    /// Establish generation 0 from the given policy and random number generator.
    pub fn seed_with<R: Rng + ?Sized>(
        &mut self,
        policy: SeedPolicy,
        rng: &mut R,
    ) -> Result<(), ConfigError> {
        seed(&mut self.current, policy, rng)?;
        self.start();
        Ok(())
    }

    /// Establish a given grid as generation 0.
    pub fn seed_from(&mut self, grid: &Grid) -> Result<(), ConfigError> {
        if !self.current.same_dimensions(grid) {
            return Err(ConfigError::DimensionMismatch);
        }

        self.current.clone_from(grid);
        self.start();
        Ok(())
    }

    fn start(&mut self) {
        self.generation = 0;
        self.phase = Phase::Seeded;
    }

    /// Advance one generation, and return the new current generation.
    ///
    /// Fails if the grid has not been seeded.
    pub fn step(&mut self) -> Result<&Grid, StateError> {
        if self.phase == Phase::Uninitialized {
            return Err(StateError::NotSeeded);
        }

        advance(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);

        self.generation += 1;
        self.phase = Phase::Running;

        log::debug!(
            "Generation {}: {} living cells",
            self.generation,
            self.current.population()
        );

        Ok(&self.current)
    }

    /// Kill every cell and go back to [`Phase::Uninitialized`].
    pub fn reset(&mut self) {
        self.current.clear();
        self.generation = 0;
        self.phase = Phase::Uninitialized;
    }
}
