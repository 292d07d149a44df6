//! ABC configuration.

use crate::bounds::Bounds;
use crate::error::Error;

/// Configuration for the ABC engine.
///
/// # Defaults
///
/// ```
/// use metaswarm::abc::AbcConfig;
///
/// let config = AbcConfig::default();
/// assert_eq!(config.colony_size, 30);
/// assert_eq!(config.generations, 100);
/// ```
#[derive(Debug, Clone)]
pub struct AbcConfig {
    /// Number of food sources. One employed bee and one onlooker bee
    /// act per source per generation.
    pub colony_size: usize,

    /// Dimensionality of the search space. Cross-checked against the
    /// objective at engine construction.
    pub dimension: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Search box applied to every dimension.
    pub bounds: Bounds,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AbcConfig {
    fn default() -> Self {
        Self {
            colony_size: 30,
            dimension: 2,
            generations: 100,
            bounds: Bounds::default(),
            seed: None,
        }
    }
}

impl AbcConfig {
    /// Sets the number of food sources.
    pub fn with_colony_size(mut self, n: usize) -> Self {
        self.colony_size = n;
        self
    }

    /// Sets the search-space dimensionality.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the search bounds.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.colony_size == 0 {
            return Err(Error::InvalidConfiguration(
                "colony_size must be at least 1".into(),
            ));
        }
        if self.dimension == 0 {
            return Err(Error::InvalidConfiguration(
                "dimension must be at least 1".into(),
            ));
        }
        if self.generations == 0 {
            return Err(Error::InvalidConfiguration(
                "generations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
