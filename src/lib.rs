//! Population-based metaheuristic optimization.
//!
//! Searches a bounded real (or binary) space for a minimizing
//! candidate without gradient information, using stochastic population
//! dynamics:
//!
//! - **Particle Swarm Optimization (PSO)**: particles balance inertia
//!   against pulls toward their personal best and the swarm best.
//! - **Artificial Bee Colony (ABC)**: employed and onlooker bees
//!   perturb food sources around the running global best.
//! - **Genetic Algorithm (GA)**: binary-encoded knapsack solving with
//!   tournament selection, single-point crossover, and elitism.
//!
//! # Architecture
//!
//! Objective functions are external collaborators: the engines consume
//! them only through the [`objective::Objective`] contract (vector in,
//! scalar out, lower is better). Each engine is an owned value
//! implementing the [`engine::Engine`] capability — construct with a
//! config, [`step`](engine::Engine::step) per generation or
//! [`run`](engine::Engine::run) to completion, and collect a result
//! carrying the best candidate plus an append-only
//! [`history::History`]. Visualization and reporting hang off the
//! per-generation [`engine::Snapshot`] observer; the core touches no
//! file system or renderer.
//!
//! Runs are bounded (a fixed generation count, no early stopping) and
//! reproducible: a seeded config yields bit-identical histories.
//!
//! # Example
//!
//! ```
//! use metaswarm::engine::Engine;
//! use metaswarm::objective::FnObjective;
//! use metaswarm::pso::{PsoConfig, PsoEngine};
//!
//! let sphere = FnObjective::new(2, |x: &[f64]| x.iter().map(|v| v * v).sum());
//! let config = PsoConfig::default().with_generations(50).with_seed(42);
//! let result = PsoEngine::new(sphere, &config).unwrap().run().unwrap();
//!
//! assert_eq!(result.history.len(), 50);
//! assert!(result.best_fitness >= 0.0);
//! ```

pub mod abc;
pub mod bounds;
pub mod engine;
pub mod error;
pub mod ga;
pub mod history;
pub mod objective;
pub mod pso;
pub mod random;
