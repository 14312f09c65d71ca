//! Evolutionary loop execution.
//!
//! [`Solver`] orchestrates the complete search:
//! initialization → {selection → crossover → convergence check → mutation} → answer.

use crate::config::ProblemParams;
use crate::fitness::{assess_population, fitness};
use crate::operators::{crossover, mutate};
use crate::population::initialize;
use crate::selection::select;
use crate::types::Decision;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of one solve.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The best decision in the final population, ties broken by first
    /// occurrence in population order.
    pub best: Decision,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generation transitions attempted, including the one that
    /// triggered convergence.
    pub generations: usize,

    /// Whether the run stopped because the fitness-sum delta fell at or
    /// below `stop_threshold` (as opposed to hitting `max_generations`).
    pub converged: bool,

    /// Population fitness sum at initialization and after each committed
    /// generation. The candidate that triggers convergence is discarded and
    /// does not appear here.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::{Item, ProblemParams, Solver};
///
/// let params = ProblemParams::new(10.0, vec![Item::new(5.0, 4.0), Item::new(3.0, 7.0)])
///     .with_population_size(20)
///     .with_max_generations(100)
///     .with_seed(42);
/// let result = Solver::run(&params);
/// assert!(result.best_fitness <= 8.0);
/// ```
pub struct Solver;

impl Solver {
    /// Runs the solver, deriving the random source from `params.seed`
    /// (or from entropy when no seed is set).
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`ProblemParams::validate`]
    /// first to get a descriptive error).
    pub fn run(params: &ProblemParams) -> SolveResult {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(params, &mut rng)
    }

    /// Runs the solver against an explicit random source.
    ///
    /// Every stochastic step draws from `rng`, so a seeded generator makes
    /// the entire run reproducible.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<R: Rng>(params: &ProblemParams, rng: &mut R) -> SolveResult {
        params.validate().expect("invalid ProblemParams");

        // 1. Initialize and assess the starting population.
        let mut population = initialize(params.items.len(), params.population_size, rng);
        let mut population_fitness = assess_population(&population, params);
        let mut fitness_history = vec![population_fitness];

        let mut generations = 0usize;
        let mut converged = false;

        // 2. Evolutionary loop.
        loop {
            if let Some(cap) = params.max_generations {
                if generations >= cap {
                    break;
                }
            }

            let candidate = crossover(&select(&population, params, rng), params, rng);
            generations += 1;

            // Convergence is judged on the selection+crossover candidate.
            // A converging candidate is discarded: the answer comes from the
            // last accepted population, not from the candidate that
            // triggered the stop.
            let candidate_fitness = assess_population(&candidate, params);
            if (candidate_fitness - population_fitness).abs() <= params.stop_threshold {
                converged = true;
                break;
            }

            // Commit, with mutation applied before the candidate becomes
            // the working population.
            population = mutate(&candidate, params, rng);
            population_fitness = assess_population(&population, params);
            fitness_history.push(population_fitness);
        }

        // 3. Report the winner.
        let best = best_decision(&population, params).clone();
        let best_fitness = fitness(&best, params);

        SolveResult {
            best,
            best_fitness,
            generations,
            converged,
            fitness_history,
        }
    }
}

/// Returns the decision with the highest fitness; on ties, the one that
/// appears first in population order.
///
/// # Panics
/// Panics if `population` is empty.
pub fn best_decision<'a>(population: &'a [Decision], params: &ProblemParams) -> &'a Decision {
    assert!(!population.is_empty(), "cannot pick a winner from an empty population");

    let mut best = &population[0];
    let mut best_fitness = fitness(best, params);
    for decision in &population[1..] {
        let f = fitness(decision, params);
        if f > best_fitness {
            best = decision;
            best_fitness = f;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
