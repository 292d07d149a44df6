//! Artificial Bee Colony (ABC).
//!
//! Each food source is a candidate position. Every generation runs two
//! phases: employed bees perturb their own source toward or away from
//! the running global best, onlooker bees pick sources by roulette
//! wheel over the raw fitness values and perturb the selected source
//! the same way. Replacements require strict improvement.
//!
//! The scout phase (abandoning sources that stop improving) is a known
//! refinement of the classical algorithm and is not implemented here.
//!
//! # Key Types
//!
//! - [`AbcConfig`]: colony size, bounds, generation count
//! - [`AbcEngine`]: owns the food sources, steps one generation at a time
//! - [`AbcResult`]: best position/fitness and the convergence history
//!
//! # References
//!
//! - Karaboga (2005), "An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization"
//! - Karaboga & Basturk (2007), "A Powerful and Efficient Algorithm for
//!   Numerical Function Optimization: Artificial Bee Colony"

mod config;
mod runner;

pub use config::AbcConfig;
pub use runner::{selection_probabilities, AbcEngine, AbcResult};
