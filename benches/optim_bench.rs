//! Criterion benchmarks for the three optimization engines.
//!
//! Uses synthetic objectives (sphere, Rastrigin, a 10-item knapsack)
//! to measure pure engine overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metaswarm::abc::{AbcConfig, AbcEngine};
use metaswarm::engine::Engine;
use metaswarm::ga::{GaConfig, GaEngine, KnapsackItem, KnapsackProblem};
use metaswarm::objective::FnObjective;
use metaswarm::pso::{PsoConfig, PsoEngine};

fn sphere(dimension: usize) -> FnObjective<impl Fn(&[f64]) -> f64 + Send + Sync> {
    FnObjective::new(dimension, |x: &[f64]| x.iter().map(|v| v * v).sum())
}

fn rastrigin(dimension: usize) -> FnObjective<impl Fn(&[f64]) -> f64 + Send + Sync> {
    FnObjective::new(dimension, |x: &[f64]| {
        10.0 * x.len() as f64
            + x.iter()
                .map(|xi| xi * xi - 10.0 * (2.0 * std::f64::consts::PI * xi).cos())
                .sum::<f64>()
    })
}

fn knapsack_instance() -> KnapsackProblem {
    KnapsackProblem::new(
        vec![
            KnapsackItem::new(2, 3),
            KnapsackItem::new(3, 4),
            KnapsackItem::new(4, 5),
            KnapsackItem::new(5, 8),
            KnapsackItem::new(9, 10),
            KnapsackItem::new(6, 7),
            KnapsackItem::new(7, 9),
            KnapsackItem::new(8, 11),
            KnapsackItem::new(10, 13),
            KnapsackItem::new(12, 15),
        ],
        30,
    )
    .unwrap()
}

fn bench_pso(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_sphere");
    for dimension in [2usize, 10] {
        group.bench_with_input(
            BenchmarkId::from_parameter(dimension),
            &dimension,
            |b, &dimension| {
                let config = PsoConfig::default()
                    .with_dimension(dimension)
                    .with_generations(50)
                    .with_seed(42);
                b.iter(|| {
                    let engine = PsoEngine::new(sphere(dimension), &config).unwrap();
                    black_box(engine.run().unwrap())
                });
            },
        );
    }
    group.finish();
}

fn bench_abc(c: &mut Criterion) {
    c.bench_function("abc_rastrigin_2d", |b| {
        let config = AbcConfig::default().with_generations(50).with_seed(42);
        b.iter(|| {
            let engine = AbcEngine::new(rastrigin(2), &config).unwrap();
            black_box(engine.run().unwrap())
        });
    });
}

fn bench_ga(c: &mut Criterion) {
    c.bench_function("ga_knapsack_10_items", |b| {
        let problem = knapsack_instance();
        let config = GaConfig::default().with_seed(42);
        b.iter(|| {
            let engine = GaEngine::new(problem.clone(), &config).unwrap();
            black_box(engine.run().unwrap())
        });
    });
}

criterion_group!(benches, bench_pso, bench_abc, bench_ga);
criterion_main!(benches);
