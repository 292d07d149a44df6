//! GA configuration.

use crate::error::Error;

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use metaswarm::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 40);
/// assert_eq!(config.elite_count, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use metaswarm::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_mutation_rate(0.5)
///     .with_seed(42);
/// ```
///
/// # Preconditions
///
/// Tournament sampling draws `tournament_size` distinct individuals
/// per parent, and the selection pool holds ⌈population_size / 2⌉
/// winners. For the sampling to exert meaningful pressure the
/// population should comfortably exceed the tournament size; the
/// validator only enforces `tournament_size <= population_size`.
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals. Held constant across generations.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Probability that a freshly produced child has one random bit
    /// flipped. High rates keep the search exploratory.
    pub mutation_rate: f64,

    /// Number of top individuals carried unchanged into the next
    /// generation.
    pub elite_count: usize,

    /// Individuals sampled (without replacement) per tournament.
    pub tournament_size: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 40,
            mutation_rate: 0.8,
            elite_count: 2,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elitism count.
    pub fn with_elite_count(mut self, k: usize) -> Self {
        self.elite_count = k;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfiguration(
                "population_size must be at least 2".into(),
            ));
        }
        if self.generations == 0 {
            return Err(Error::InvalidConfiguration(
                "generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidConfiguration(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.elite_count >= self.population_size {
            return Err(Error::InvalidConfiguration(
                "elite_count must be smaller than population_size".into(),
            ));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(Error::InvalidConfiguration(format!(
                "tournament_size must be within [1, population_size], got {}",
                self.tournament_size
            )));
        }
        Ok(())
    }
}
