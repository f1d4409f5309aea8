use crate::{error::ConfigError, grid::Grid, seed::SeedPolicy};
#[cfg(feature = "clap")]
use clap::{Args, ValueEnum};
use strum::Display;

/// Which [`SeedPolicy`] to use for the first generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
pub enum SeedKind {
    /// Each cell is alive independently with probability [`density`](Config::density).
    #[cfg_attr(feature = "clap", value(name = "bernoulli", alias = "b"))]
    Bernoulli,

    /// A fixed number of distinct cells are alive.
    ///
    /// The number is [`count`](Config::count), or [`density`](Config::density)
    /// times the number of cells if it is not given.
    #[default]
    #[cfg_attr(feature = "clap", value(name = "fixed", alias = "f"))]
    FixedCount,
}

/// The configuration of the simulation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "clap", derive(Args))]
pub struct Config {
    /// Width of the grid.
    #[cfg_attr(feature = "clap", arg(short = 'W', long, default_value = "80"))]
    pub width: usize,

    /// Height of the grid.
    #[cfg_attr(feature = "clap", arg(short = 'H', long, default_value = "40"))]
    pub height: usize,

    /// How to choose the living cells of the first generation.
    #[cfg_attr(feature = "clap", arg(short, long, value_enum, default_value = "fixed"))]
    pub kind: SeedKind,

    /// Proportion of living cells in the first generation.
    ///
    /// For [`Bernoulli`](SeedKind::Bernoulli), this is the probability of each cell
    /// being alive.
    #[cfg_attr(feature = "clap", arg(short, long, default_value = "0.6"))]
    pub density: f64,

    /// Exact number of living cells for [`FixedCount`](SeedKind::FixedCount).
    ///
    /// If this is [`None`], it is derived from [`density`](Config::density).
    #[cfg_attr(feature = "clap", arg(short, long))]
    pub count: Option<usize>,

    /// Random seed for the first generation.
    ///
    /// If this is [`None`], then the seed is randomly generated.
    #[cfg_attr(feature = "clap", arg(long))]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(80, 40)
    }
}

impl Config {
    /// The default proportion of living cells.
    pub const DEFAULT_DENSITY: f64 = 0.6;

    /// Create a new configuration.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            kind: SeedKind::FixedCount,
            density: Self::DEFAULT_DENSITY,
            count: None,
            seed: None,
        }
    }

    /// Seed with [`Bernoulli`](SeedKind::Bernoulli) and the given probability.
    #[inline]
    pub const fn with_bernoulli(mut self, density: f64) -> Self {
        self.kind = SeedKind::Bernoulli;
        self.density = density;
        self
    }

    /// Seed with [`FixedCount`](SeedKind::FixedCount) and the given number of cells.
    #[inline]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.kind = SeedKind::FixedCount;
        self.count = Some(count);
        self
    }

    /// Set the random seed.
    ///
    /// See [`seed`](Config::seed) for more details.
    #[inline]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The seeding policy described by this configuration.
    pub fn policy(&self) -> SeedPolicy {
        match self.kind {
            SeedKind::Bernoulli => SeedPolicy::Bernoulli(self.density),
            SeedKind::FixedCount => SeedPolicy::FixedCount(self.count.unwrap_or_else(|| {
                let cells = self.width.saturating_mul(self.height);
                (cells as f64 * self.density.clamp(0.0, 1.0)).round() as usize
            })),
        }
    }

    /// Check whether the configuration is valid.
    pub fn check(self) -> Result<Self, ConfigError> {
        let grid = Grid::new(self.width, self.height)?;

        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidProbability(self.density));
        }

        self.policy().check(grid.len())?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy() {
        let config = Config::new(10, 10);
        assert_eq!(config.policy(), SeedPolicy::FixedCount(60));

        let config = config.with_count(7);
        assert_eq!(config.policy(), SeedPolicy::FixedCount(7));

        let config = config.with_bernoulli(0.25);
        assert_eq!(config.policy(), SeedPolicy::Bernoulli(0.25));
    }

    #[test]
    fn test_check() {
        assert!(Config::new(4, 4).check().is_ok());
        assert!(Config::new(4, 4).with_count(16).check().is_ok());

        assert_eq!(Config::new(0, 4).check(), Err(ConfigError::InvalidSize));
        assert_eq!(
            Config::new(4, 4).with_count(20).check(),
            Err(ConfigError::TooManyCells {
                count: 20,
                cells: 16
            })
        );
        assert_eq!(
            Config::new(4, 4).with_bernoulli(2.0).check(),
            Err(ConfigError::InvalidProbability(2.0))
        );

        let mut config = Config::new(4, 4);
        config.density = -1.0;
        assert_eq!(config.check(), Err(ConfigError::InvalidProbability(-1.0)));
    }
}
