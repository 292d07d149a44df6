//! Genetic Algorithm over the binary knapsack problem.
//!
//! Individuals are bit-strings selecting items from a fixed catalog.
//! Fitness is the total value of the selected items, hard-penalized to
//! zero when the total weight exceeds capacity — no partial credit and
//! no repair. Unlike the continuous engines, this engine maximizes.
//!
//! Each generation: evaluate, record (generation max plus per-item
//! selection counts), tournament selection, single-point crossover,
//! single-bit mutation, then elitist replacement.
//!
//! # Key Types
//!
//! - [`KnapsackItem`] / [`KnapsackProblem`]: the item catalog and capacity
//! - [`GaConfig`]: population size, rates, elitism, tournament size
//! - [`GaEngine`]: owns the population, steps one generation at a time
//! - [`GaResult`]: best genome, its value and weight, and the history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod runner;
mod types;

pub use config::GaConfig;
pub use runner::{GaEngine, GaResult};
pub use types::{KnapsackItem, KnapsackProblem};
