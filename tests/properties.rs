//! Property tests over the shared invariants of all engines.

use metaswarm::abc::{selection_probabilities, AbcConfig, AbcEngine};
use metaswarm::bounds::Bounds;
use metaswarm::engine::Engine;
use metaswarm::ga::{GaConfig, GaEngine, KnapsackItem, KnapsackProblem};
use metaswarm::objective::FnObjective;
use metaswarm::pso::{PsoConfig, PsoEngine};
use proptest::prelude::*;

fn sphere(dimension: usize) -> FnObjective<impl Fn(&[f64]) -> f64 + Send + Sync> {
    FnObjective::new(dimension, |x: &[f64]| x.iter().map(|v| v * v).sum())
}

proptest! {
    #[test]
    fn clamp_always_lands_inside(v in -1e12f64..1e12, lo in -100.0f64..0.0, span in 0.1f64..100.0) {
        let bounds = Bounds::new(lo, lo + span).unwrap();
        let clamped = bounds.clamp(v);
        prop_assert!(bounds.contains(clamped));
    }

    #[test]
    fn selection_probabilities_normalize(fitness in prop::collection::vec(0.0f64..1e6, 1..64)) {
        let p = selection_probabilities(&fitness);
        prop_assert_eq!(p.len(), fitness.len());
        let sum: f64 = p.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "probabilities summed to {}", sum);
    }

    #[test]
    fn selection_probabilities_uniform_on_zero(n in 1usize..64) {
        let p = selection_probabilities(&vec![0.0; n]);
        for &pi in &p {
            prop_assert!((pi - 1.0 / n as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn pso_best_monotone_any_seed(seed in any::<u64>()) {
        let config = PsoConfig::default()
            .with_swarm_size(8)
            .with_generations(10)
            .with_seed(seed);
        let result = PsoEngine::new(sphere(2), &config).unwrap().run().unwrap();
        for window in result.history.records().windows(2) {
            prop_assert!(window[1].best <= window[0].best);
        }
        let bounds = Bounds::default();
        for &v in &result.best_position {
            prop_assert!(bounds.contains(v));
        }
    }

    #[test]
    fn abc_best_monotone_any_seed(seed in any::<u64>()) {
        let config = AbcConfig::default()
            .with_colony_size(8)
            .with_generations(10)
            .with_seed(seed);
        let result = AbcEngine::new(sphere(2), &config).unwrap().run().unwrap();
        for window in result.history.records().windows(2) {
            prop_assert!(window[1].best <= window[0].best);
        }
    }

    #[test]
    fn ga_best_is_feasible_any_seed(seed in any::<u64>()) {
        let problem = KnapsackProblem::new(
            vec![
                KnapsackItem::new(2, 3),
                KnapsackItem::new(3, 4),
                KnapsackItem::new(4, 5),
                KnapsackItem::new(5, 8),
            ],
            9,
        )
        .unwrap();
        let config = GaConfig::default()
            .with_population_size(12)
            .with_generations(8)
            .with_seed(seed);
        let result = GaEngine::new(problem.clone(), &config).unwrap().run().unwrap();

        // A strictly positive fitness certifies a feasible selection
        // worth exactly that value; zero means nothing better than the
        // empty knapsack was ever evaluated.
        if result.best_fitness > 0.0 {
            prop_assert!(result.best_weight <= problem.capacity());
            prop_assert_eq!(
                result.best_fitness,
                problem.total_value(&result.best_genome) as f64
            );
        }
        for window in result.history.records().windows(2) {
            prop_assert!(window[1].best >= window[0].best);
        }
    }

    #[test]
    fn seeded_runs_are_bit_identical(seed in any::<u64>()) {
        let config = PsoConfig::default()
            .with_swarm_size(6)
            .with_generations(6)
            .with_seed(seed);
        let a = PsoEngine::new(sphere(2), &config).unwrap().run().unwrap();
        let b = PsoEngine::new(sphere(2), &config).unwrap().run().unwrap();
        prop_assert_eq!(a.history, b.history);
        prop_assert_eq!(a.best_position, b.best_position);
    }
}
