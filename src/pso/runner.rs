//! PSO generation loop.

use super::config::PsoConfig;
use crate::engine::{Engine, Snapshot};
use crate::error::Error;
use crate::history::{History, SwarmRecord};
use crate::objective::{evaluate_population, Objective};
use crate::random::rng_from_seed;
use rand::rngs::SmallRng;
use rand::Rng;

/// Result of a PSO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoResult {
    /// The best position found across the entire run.
    pub best_position: Vec<f64>,

    /// Fitness of the best position.
    pub best_fitness: f64,

    /// One record per generation.
    pub history: History<SwarmRecord>,
}

/// Owns the swarm state and advances it one generation per step.
///
/// Construction samples the initial swarm inside the bounds, evaluates
/// it once, and seeds the personal and global bests from it.
///
/// # Usage
///
/// ```
/// use metaswarm::engine::Engine;
/// use metaswarm::objective::FnObjective;
/// use metaswarm::pso::{PsoConfig, PsoEngine};
///
/// let sphere = FnObjective::new(2, |x: &[f64]| x.iter().map(|v| v * v).sum());
/// let config = PsoConfig::default().with_generations(20).with_seed(42);
/// let result = PsoEngine::new(sphere, &config).unwrap().run().unwrap();
/// assert!(result.best_fitness >= 0.0);
/// ```
pub struct PsoEngine<O: Objective> {
    objective: O,
    config: PsoConfig,
    rng: SmallRng,
    positions: Vec<Vec<f64>>,
    velocities: Vec<Vec<f64>>,
    fitness: Vec<f64>,
    best_positions: Vec<Vec<f64>>,
    best_fitness: Vec<f64>,
    global_best: Vec<f64>,
    global_best_fitness: f64,
    history: History<SwarmRecord>,
}

impl<O: Objective> core::fmt::Debug for PsoEngine<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PsoEngine")
            .field("config", &self.config)
            .field("global_best", &self.global_best)
            .field("global_best_fitness", &self.global_best_fitness)
            .finish_non_exhaustive()
    }
}

impl<O: Objective> PsoEngine<O> {
    /// Validates the configuration and initializes the swarm.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] for a bad config or a
    /// dimension mismatch between config and objective; objective
    /// errors from the initial evaluation.
    pub fn new(objective: O, config: &PsoConfig) -> Result<Self, Error> {
        config.validate()?;
        if objective.dimension() != config.dimension {
            return Err(Error::InvalidConfiguration(format!(
                "objective dimension {} does not match configured dimension {}",
                objective.dimension(),
                config.dimension
            )));
        }

        let mut rng = rng_from_seed(config.seed);
        let positions: Vec<Vec<f64>> = (0..config.swarm_size)
            .map(|_| config.bounds.sample_position(config.dimension, &mut rng))
            .collect();
        let velocities = vec![vec![0.0; config.dimension]; config.swarm_size];
        let fitness = evaluate_population(&objective, &positions)?;

        // Personal bests start at the initial positions; the global
        // best is the minimum personal best.
        let best_positions = positions.clone();
        let best_fitness = fitness.clone();
        let (best_idx, best_value) = argmin(&best_fitness);

        Ok(Self {
            global_best: best_positions[best_idx].clone(),
            global_best_fitness: best_value,
            history: History::with_capacity(config.generations),
            objective,
            config: config.clone(),
            rng,
            positions,
            velocities,
            fitness,
            best_positions,
            best_fitness,
        })
    }

    /// Current particle positions, in swarm order.
    pub fn positions(&self) -> &[Vec<f64>] {
        &self.positions
    }

    /// Fitness of each particle, index-aligned with
    /// [`positions`](Self::positions).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Best position observed so far.
    pub fn best_position(&self) -> &[f64] {
        &self.global_best
    }

    /// Best fitness observed so far.
    pub fn best_fitness(&self) -> f64 {
        self.global_best_fitness
    }

    /// Records appended so far, one per completed generation.
    pub fn history(&self) -> &History<SwarmRecord> {
        &self.history
    }

    /// Advances one generation, invoking `observer` with the evaluated
    /// swarm before returning.
    pub fn step_observed(
        &mut self,
        observer: &mut dyn FnMut(Snapshot<'_, Vec<f64>>),
    ) -> Result<(), Error> {
        let generation = self.history.len();
        let w = self.config.inertia;
        let c1 = self.config.cognitive;
        let c2 = self.config.social;
        let bounds = self.config.bounds;

        // Move every particle; fitness is only recomputed once the
        // whole swarm has moved.
        for i in 0..self.positions.len() {
            for d in 0..self.config.dimension {
                let r1: f64 = self.rng.random_range(0.0..1.0);
                let r2: f64 = self.rng.random_range(0.0..1.0);
                let v = w * self.velocities[i][d]
                    + c1 * r1 * (self.best_positions[i][d] - self.positions[i][d])
                    + c2 * r2 * (self.global_best[d] - self.positions[i][d]);
                self.velocities[i][d] = v;
                self.positions[i][d] = bounds.clamp(self.positions[i][d] + v);
            }
        }

        self.fitness = evaluate_population(&self.objective, &self.positions)?;

        // Strict improvement only; ties keep the incumbent.
        for i in 0..self.positions.len() {
            if self.fitness[i] < self.best_fitness[i] {
                self.best_fitness[i] = self.fitness[i];
                self.best_positions[i] = self.positions[i].clone();
            }
        }
        let (best_idx, best_value) = argmin(&self.best_fitness);
        if best_value < self.global_best_fitness {
            self.global_best_fitness = best_value;
            self.global_best = self.best_positions[best_idx].clone();
        }

        let worst = self
            .fitness
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        self.history.push(SwarmRecord {
            generation,
            best: self.global_best_fitness,
            worst,
        });

        observer(Snapshot {
            generation,
            candidates: &self.positions,
            fitness: &self.fitness,
        });
        Ok(())
    }

    /// Runs all remaining generations, invoking `observer` once per
    /// generation.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> Result<PsoResult, Error>
    where
        F: FnMut(Snapshot<'_, Vec<f64>>),
    {
        while self.completed() < self.generations() {
            self.step_observed(&mut observer)?;
        }
        Ok(self.finish())
    }
}

impl<O: Objective> Engine for PsoEngine<O> {
    type Output = PsoResult;

    fn generations(&self) -> usize {
        self.config.generations
    }

    fn completed(&self) -> usize {
        self.history.len()
    }

    fn step(&mut self) -> Result<(), Error> {
        self.step_observed(&mut |_| {})
    }

    fn finish(self) -> PsoResult {
        PsoResult {
            best_position: self.global_best,
            best_fitness: self.global_best_fitness,
            history: self.history,
        }
    }
}

/// Index and value of the minimum fitness.
fn argmin(fitness: &[f64]) -> (usize, f64) {
    let (idx, value) = fitness
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .expect("population must not be empty");
    (idx, *value)
}
