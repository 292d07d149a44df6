//! Seedable RNG construction shared by all engines.
//!
//! Every engine draws from a single reproducible stream per run: a
//! supplied seed yields bit-identical runs, an absent seed is filled
//! from [`rand::random`].

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Creates the per-run RNG from an optional seed.
pub fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
