//! ABC generation loop: employed phase, onlooker phase, best update.

use super::config::AbcConfig;
use crate::bounds::Bounds;
use crate::engine::{Engine, Snapshot};
use crate::error::Error;
use crate::history::{History, SwarmRecord};
use crate::objective::{evaluate_population, Objective};
use crate::random::rng_from_seed;
use rand::rngs::SmallRng;
use rand::Rng;

/// Result of an ABC run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbcResult {
    /// The best position found across the entire run.
    pub best_position: Vec<f64>,

    /// Fitness of the best position.
    pub best_fitness: f64,

    /// One record per generation.
    pub history: History<SwarmRecord>,
}

/// Owns the food sources and advances them one generation per step.
///
/// # Usage
///
/// ```
/// use metaswarm::abc::{AbcConfig, AbcEngine};
/// use metaswarm::engine::Engine;
/// use metaswarm::objective::FnObjective;
///
/// let sphere = FnObjective::new(2, |x: &[f64]| x.iter().map(|v| v * v).sum());
/// let config = AbcConfig::default().with_generations(20).with_seed(42);
/// let result = AbcEngine::new(sphere, &config).unwrap().run().unwrap();
/// assert_eq!(result.history.len(), 20);
/// ```
pub struct AbcEngine<O: Objective> {
    objective: O,
    config: AbcConfig,
    rng: SmallRng,
    sources: Vec<Vec<f64>>,
    fitness: Vec<f64>,
    best_position: Vec<f64>,
    best_fitness: f64,
    history: History<SwarmRecord>,
}

impl<O: Objective> AbcEngine<O> {
    /// Validates the configuration and initializes the colony.
    pub fn new(objective: O, config: &AbcConfig) -> Result<Self, Error> {
        config.validate()?;
        if objective.dimension() != config.dimension {
            return Err(Error::InvalidConfiguration(format!(
                "objective dimension {} does not match configured dimension {}",
                objective.dimension(),
                config.dimension
            )));
        }

        let mut rng = rng_from_seed(config.seed);
        let sources: Vec<Vec<f64>> = (0..config.colony_size)
            .map(|_| config.bounds.sample_position(config.dimension, &mut rng))
            .collect();
        let fitness = evaluate_population(&objective, &sources)?;
        let (best_idx, best_value) = argmin(&fitness);

        Ok(Self {
            best_position: sources[best_idx].clone(),
            best_fitness: best_value,
            history: History::with_capacity(config.generations),
            objective,
            config: config.clone(),
            rng,
            sources,
            fitness,
        })
    }

    /// Current food-source positions.
    pub fn sources(&self) -> &[Vec<f64>] {
        &self.sources
    }

    /// Fitness of each source, index-aligned with
    /// [`sources`](Self::sources).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Best position observed so far.
    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    /// Best fitness observed so far.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Records appended so far, one per completed generation.
    pub fn history(&self) -> &History<SwarmRecord> {
        &self.history
    }

    /// Advances one generation, invoking `observer` with the updated
    /// colony before returning.
    pub fn step_observed(
        &mut self,
        observer: &mut dyn FnMut(Snapshot<'_, Vec<f64>>),
    ) -> Result<(), Error> {
        let generation = self.history.len();
        let n = self.sources.len();
        // Neighbor moves anchor on the best position as it stood at the
        // start of the generation; the running best is only refreshed
        // after both phases.
        let anchor = self.best_position.clone();

        // Employed phase: each bee perturbs its own source.
        for i in 0..n {
            let candidate = neighbor_move(
                &self.sources[i],
                &anchor,
                &self.config.bounds,
                &mut self.rng,
            );
            let f = self.objective.evaluate(&candidate)?;
            if f < self.fitness[i] {
                self.sources[i] = candidate;
                self.fitness[i] = f;
            }
        }

        // Onlooker phase: sources are picked by roulette wheel over the
        // raw fitness values. Replacements inside the phase shift the
        // weights, so the distribution is rebuilt for every bee.
        for _ in 0..n {
            let probabilities = selection_probabilities(&self.fitness);
            let selected = roulette_pick(&probabilities, &mut self.rng);
            let candidate = neighbor_move(
                &self.sources[selected],
                &anchor,
                &self.config.bounds,
                &mut self.rng,
            );
            let f = self.objective.evaluate(&candidate)?;
            if f < self.fitness[selected] {
                self.sources[selected] = candidate;
                self.fitness[selected] = f;
            }
        }

        // Global best update, strict improvement only.
        let (best_idx, best_value) = argmin(&self.fitness);
        if best_value < self.best_fitness {
            self.best_fitness = best_value;
            self.best_position = self.sources[best_idx].clone();
        }

        let worst = self
            .fitness
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        self.history.push(SwarmRecord {
            generation,
            best: self.best_fitness,
            worst,
        });

        observer(Snapshot {
            generation,
            candidates: &self.sources,
            fitness: &self.fitness,
        });
        Ok(())
    }

    /// Runs all remaining generations, invoking `observer` once per
    /// generation.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> Result<AbcResult, Error>
    where
        F: FnMut(Snapshot<'_, Vec<f64>>),
    {
        while self.completed() < self.generations() {
            self.step_observed(&mut observer)?;
        }
        Ok(self.finish())
    }
}

impl<O: Objective> Engine for AbcEngine<O> {
    type Output = AbcResult;

    fn generations(&self) -> usize {
        self.config.generations
    }

    fn completed(&self) -> usize {
        self.history.len()
    }

    fn step(&mut self) -> Result<(), Error> {
        self.step_observed(&mut |_| {})
    }

    fn finish(self) -> AbcResult {
        AbcResult {
            best_position: self.best_position,
            best_fitness: self.best_fitness,
            history: self.history,
        }
    }
}

/// Onlooker selection distribution: each source's weight is its raw
/// fitness value over the colony total.
///
/// When every fitness is zero the quotient degenerates, so the
/// distribution falls back to uniform instead of dividing by zero.
pub fn selection_probabilities(fitness: &[f64]) -> Vec<f64> {
    let n = fitness.len();
    let total: f64 = fitness.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return vec![1.0 / n as f64; n];
    }
    fitness.iter().map(|&f| f / total).collect()
}

/// Draws one index from a probability vector.
fn roulette_pick<R: Rng>(probabilities: &[f64], rng: &mut R) -> usize {
    let threshold: f64 = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (i, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if cumulative > threshold {
            return i;
        }
    }
    probabilities.len() - 1 // floating-point fallback
}

/// Proposes `source + U(-1,1)^dim ⊙ (source - anchor)`, clamped.
fn neighbor_move<R: Rng>(source: &[f64], anchor: &[f64], bounds: &Bounds, rng: &mut R) -> Vec<f64> {
    source
        .iter()
        .zip(anchor.iter())
        .map(|(&x, &a)| {
            let phi: f64 = rng.random_range(-1.0..1.0);
            bounds.clamp(x + phi * (x - a))
        })
        .collect()
}

/// Index and value of the minimum fitness.
fn argmin(fitness: &[f64]) -> (usize, f64) {
    let (idx, value) = fitness
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .expect("colony must not be empty");
    (idx, *value)
}
