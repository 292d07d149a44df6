//! Particle Swarm Optimization (PSO).
//!
//! A swarm of particles moves through a bounded continuous search
//! space. Each particle is pulled toward its own best position
//! (cognitive term) and the swarm's best position (social term), with
//! inertia carrying its previous velocity. Positions are clamped to
//! the search bounds after every move.
//!
//! # Key Types
//!
//! - [`PsoConfig`]: swarm size, coefficients, bounds, generation count
//! - [`PsoEngine`]: owns the swarm state, steps one generation at a time
//! - [`PsoResult`]: best position/fitness and the convergence history
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod runner;

pub use config::PsoConfig;
pub use runner::{PsoEngine, PsoResult};
