//! PSO configuration.

use crate::bounds::Bounds;
use crate::error::Error;

/// Configuration for the PSO engine.
///
/// # Defaults
///
/// ```
/// use metaswarm::pso::PsoConfig;
///
/// let config = PsoConfig::default();
/// assert_eq!(config.swarm_size, 30);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.inertia, 0.5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use metaswarm::bounds::Bounds;
/// use metaswarm::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_swarm_size(50)
///     .with_dimension(3)
///     .with_bounds(Bounds::new(-10.0, 10.0).unwrap())
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub swarm_size: usize,

    /// Dimensionality of the search space.
    ///
    /// Must match the objective's dimension; the engine constructor
    /// cross-checks the two.
    pub dimension: usize,

    /// Number of generations to run. The run is bounded and has no
    /// early-stopping criterion.
    pub generations: usize,

    /// Search box applied to every dimension.
    pub bounds: Bounds,

    /// Inertia weight `w`: how much of the previous velocity carries
    /// over. Typical range 0.4–0.9.
    pub inertia: f64,

    /// Cognitive coefficient `c1`: pull toward the particle's own best.
    pub cognitive: f64,

    /// Social coefficient `c2`: pull toward the swarm's best.
    pub social: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: 30,
            dimension: 2,
            generations: 100,
            bounds: Bounds::default(),
            inertia: 0.5,
            cognitive: 1.0,
            social: 2.0,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the swarm size.
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
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

    /// Sets the inertia weight `w`.
    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    /// Sets the cognitive coefficient `c1`.
    pub fn with_cognitive(mut self, c1: f64) -> Self {
        self.cognitive = c1;
        self
    }

    /// Sets the social coefficient `c2`.
    pub fn with_social(mut self, c2: f64) -> Self {
        self.social = c2;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] for zero sizes or counts, zero
    /// dimension, or non-finite/negative coefficients.
    pub fn validate(&self) -> Result<(), Error> {
        if self.swarm_size == 0 {
            return Err(Error::InvalidConfiguration(
                "swarm_size must be at least 1".into(),
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
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
