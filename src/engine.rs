//! The capability shared by all three engines.
//!
//! Each engine is an owned, single-instance value: construction
//! validates the configuration and initializes the population,
//! [`step`](Engine::step) advances exactly one generation, and
//! [`finish`](Engine::finish) consumes the engine into its result.
//! [`run`](Engine::run) drives the remaining generations to the
//! configured count. No module-level or process-wide state exists;
//! dropping the engine discards the run.

use crate::error::Error;

/// A population-based optimization engine driven one generation at a
/// time.
///
/// # Examples
///
/// ```
/// use metaswarm::engine::Engine;
/// use metaswarm::objective::FnObjective;
/// use metaswarm::pso::{PsoConfig, PsoEngine};
///
/// let sphere = FnObjective::new(2, |x: &[f64]| x.iter().map(|v| v * v).sum());
/// let config = PsoConfig::default()
///     .with_swarm_size(10)
///     .with_generations(5)
///     .with_seed(42);
/// let result = PsoEngine::new(sphere, &config).unwrap().run().unwrap();
/// assert_eq!(result.history.len(), 5);
/// ```
pub trait Engine: Sized {
    /// Value produced when the run terminates.
    type Output;

    /// The configured total number of generations.
    fn generations(&self) -> usize;

    /// Generations completed so far.
    fn completed(&self) -> usize;

    /// Advances the engine by one generation.
    ///
    /// # Errors
    ///
    /// Propagates objective contract violations; the run is aborted,
    /// not retried.
    fn step(&mut self) -> Result<(), Error>;

    /// Consumes the engine, producing the final result.
    fn finish(self) -> Self::Output;

    /// Runs all remaining generations and returns the result.
    fn run(mut self) -> Result<Self::Output, Error> {
        while self.completed() < self.generations() {
            self.step()?;
        }
        Ok(self.finish())
    }
}

/// Read-only view of one generation, handed to reporting observers.
///
/// Observers receive the population exactly as it was evaluated this
/// generation, together with the matching fitness values. The borrow
/// ends when the observer returns; snapshots cannot outlive or mutate
/// engine state.
#[derive(Debug)]
pub struct Snapshot<'a, C> {
    /// Zero-based index of the generation just evaluated.
    pub generation: usize,
    /// The candidates of this generation, in population order.
    pub candidates: &'a [C],
    /// Fitness of each candidate, index-aligned with `candidates`.
    pub fitness: &'a [f64],
}
