//! GA evolutionary loop: evaluate, track, select, crossover, mutate,
//! elitist replacement.

use super::config::GaConfig;
use super::types::KnapsackProblem;
use crate::engine::{Engine, Snapshot};
use crate::error::Error;
use crate::history::{History, KnapsackRecord};
use crate::random::rng_from_seed;
use rand::rngs::SmallRng;
use rand::Rng;

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best individual found across all evaluated generations.
    pub best_genome: Vec<bool>,

    /// Fitness of the best individual (total value; zero only if no
    /// feasible non-empty selection was ever found).
    pub best_fitness: f64,

    /// Total weight of the best individual.
    pub best_weight: u64,

    /// One record per generation.
    pub history: History<KnapsackRecord>,
}

/// Owns the population and advances it one generation per step.
///
/// # Usage
///
/// ```
/// use metaswarm::engine::Engine;
/// use metaswarm::ga::{GaConfig, GaEngine, KnapsackItem, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(
///     vec![
///         KnapsackItem::new(2, 3),
///         KnapsackItem::new(3, 4),
///         KnapsackItem::new(4, 5),
///     ],
///     5,
/// )
/// .unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(42);
/// let result = GaEngine::new(problem.clone(), &config).unwrap().run().unwrap();
/// assert!(problem.total_weight(&result.best_genome) <= problem.capacity());
/// ```
pub struct GaEngine {
    problem: KnapsackProblem,
    config: GaConfig,
    rng: SmallRng,
    population: Vec<Vec<bool>>,
    fitness: Vec<f64>,
    best_genome: Vec<bool>,
    best_fitness: f64,
    history: History<KnapsackRecord>,
}

impl GaEngine {
    /// Validates the configuration and initializes a random population.
    pub fn new(problem: KnapsackProblem, config: &GaConfig) -> Result<Self, Error> {
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);
        let item_count = problem.item_count();
        let population: Vec<Vec<bool>> = (0..config.population_size)
            .map(|_| (0..item_count).map(|_| rng.random_bool(0.5)).collect())
            .collect();
        let fitness: Vec<f64> = population
            .iter()
            .map(|genome| problem.evaluate(genome))
            .collect::<Result<_, _>>()?;
        let best_idx = argmax(&fitness);

        Ok(Self {
            best_genome: population[best_idx].clone(),
            best_fitness: fitness[best_idx],
            history: History::with_capacity(config.generations),
            problem,
            config: config.clone(),
            rng,
            population,
            fitness,
        })
    }

    /// Current population, in slot order.
    pub fn population(&self) -> &[Vec<bool>] {
        &self.population
    }

    /// Fitness of the most recently evaluated generation.
    ///
    /// Aligned with [`population`](Self::population) after construction
    /// and stale after [`step`](Engine::step) replaces the population;
    /// the next step re-evaluates.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Best genome observed so far.
    pub fn best_genome(&self) -> &[bool] {
        &self.best_genome
    }

    /// Best fitness observed so far.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// The problem instance this engine searches.
    pub fn problem(&self) -> &KnapsackProblem {
        &self.problem
    }

    /// Records appended so far, one per completed generation.
    pub fn history(&self) -> &History<KnapsackRecord> {
        &self.history
    }

    /// Advances one generation, invoking `observer` with the evaluated
    /// population before it is replaced.
    pub fn step_observed(
        &mut self,
        observer: &mut dyn FnMut(Snapshot<'_, Vec<bool>>),
    ) -> Result<(), Error> {
        let generation = self.history.len();
        let pop_size = self.config.population_size;
        let item_count = self.problem.item_count();

        // 1. Evaluate.
        self.fitness = self
            .population
            .iter()
            .map(|genome| self.problem.evaluate(genome))
            .collect::<Result<_, _>>()?;

        // 2. Track: generation max and per-item selection counts.
        let gen_best_idx = argmax(&self.fitness);
        if self.fitness[gen_best_idx] > self.best_fitness {
            self.best_fitness = self.fitness[gen_best_idx];
            self.best_genome = self.population[gen_best_idx].clone();
        }
        let selection_counts: Vec<usize> = (0..item_count)
            .map(|i| self.population.iter().filter(|genome| genome[i]).count())
            .collect();
        self.history.push(KnapsackRecord {
            generation,
            best: self.fitness[gen_best_idx],
            selection_counts,
        });

        observer(Snapshot {
            generation,
            candidates: &self.population,
            fitness: &self.fitness,
        });

        // 3. Select: ⌈N/2⌉ tournament winners.
        let pool_size = pop_size.div_ceil(2);
        let mut pool: Vec<Vec<bool>> = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let winner = self.tournament();
            pool.push(self.population[winner].clone());
        }

        // 4. Crossover: sequential pairs, one cut point each. An odd
        // leftover individual does not reproduce.
        let mut children: Vec<Vec<bool>> = Vec::with_capacity(pool_size);
        for pair in pool.chunks_exact(2) {
            let cut = self.rng.random_range(1..item_count);
            let mut child1 = pair[0][..cut].to_vec();
            child1.extend_from_slice(&pair[1][cut..]);
            let mut child2 = pair[1][..cut].to_vec();
            child2.extend_from_slice(&pair[0][cut..]);
            children.push(child1);
            children.push(child2);
        }

        // 5. Mutate: with probability mutation_rate, flip one bit.
        for child in &mut children {
            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                let bit = self.rng.random_range(0..item_count);
                child[bit] = !child[bit];
            }
        }

        // 6. Elitism + replacement. The previous population is ranked
        // by fitness descending (stable, so ties keep slot order); the
        // top elite_count survive unchanged, children fill the rest,
        // and any shortfall is padded by continuing down the ranking.
        let mut ranked: Vec<usize> = (0..pop_size).collect();
        ranked.sort_by(|&a, &b| {
            self.fitness[b]
                .partial_cmp(&self.fitness[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let elite_count = self.config.elite_count;
        let mut next: Vec<Vec<bool>> = ranked
            .iter()
            .take(elite_count)
            .map(|&i| self.population[i].clone())
            .collect();
        children.truncate(pop_size - elite_count);
        next.extend(children);
        let mut rank = elite_count;
        while next.len() < pop_size {
            next.push(self.population[ranked[rank % pop_size]].clone());
            rank += 1;
        }

        self.population = next;
        Ok(())
    }

    /// Runs all remaining generations, invoking `observer` once per
    /// generation.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> Result<GaResult, Error>
    where
        F: FnMut(Snapshot<'_, Vec<bool>>),
    {
        while self.completed() < self.generations() {
            self.step_observed(&mut observer)?;
        }
        Ok(self.finish())
    }

    /// One tournament: sample `tournament_size` distinct individuals,
    /// return the index of the fittest.
    fn tournament(&mut self) -> usize {
        let indices = rand::seq::index::sample(
            &mut self.rng,
            self.config.population_size,
            self.config.tournament_size,
        );
        indices
            .iter()
            .max_by(|&a, &b| {
                self.fitness[a]
                    .partial_cmp(&self.fitness[b])
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("tournament_size is at least 1")
    }
}

impl Engine for GaEngine {
    type Output = GaResult;

    fn generations(&self) -> usize {
        self.config.generations
    }

    fn completed(&self) -> usize {
        self.history.len()
    }

    fn step(&mut self) -> Result<(), Error> {
        self.step_observed(&mut |_| {})
    }

    fn finish(self) -> GaResult {
        let best_weight = self.problem.total_weight(&self.best_genome);
        GaResult {
            best_genome: self.best_genome,
            best_fitness: self.best_fitness,
            best_weight,
            history: self.history,
        }
    }
}

/// Index of the maximum fitness (maximization: higher value wins).
fn argmax(fitness: &[f64]) -> usize {
    fitness
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .expect("population must not be empty")
}
