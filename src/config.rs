//! Problem configuration.
//!
//! [`ProblemParams`] bundles the knapsack instance with all parameters that
//! control the evolutionary loop.

use crate::types::Item;

/// Configuration for one knapsack solve.
///
/// Combines the problem instance (`items`, `max_weight`) with the algorithm
/// parameters. Constructed once before solving; never mutated afterwards.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::{Item, ProblemParams};
///
/// let params = ProblemParams::new(30.0, vec![Item::new(8.0, 5.0)]);
/// assert_eq!(params.population_size, 100);
/// assert_eq!(params.crossover_probability, 0.5);
/// assert_eq!(params.mutation_probability, 0.05);
/// assert_eq!(params.stop_threshold, 0.5);
/// assert!(params.max_generations.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::{Item, ProblemParams};
///
/// let params = ProblemParams::new(30.0, vec![Item::new(8.0, 5.0)])
///     .with_population_size(200)
///     .with_crossover_probability(0.8)
///     .with_mutation_probability(0.01)
///     .with_max_generations(500)
///     .with_seed(42);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemParams {
    /// Knapsack capacity. Decisions whose total weight exceeds this are
    /// infeasible and score a fitness of exactly 0.
    pub max_weight: f64,

    /// Number of candidate solutions maintained per generation.
    ///
    /// Larger populations increase diversity but slow down each generation.
    pub population_size: usize,

    /// Probability of recombining a selected pair (0.0–1.0).
    ///
    /// Applied independently to each of the `population_size / 2`
    /// recombination attempts per generation.
    pub crossover_probability: f64,

    /// Per-bit probability of flipping during mutation (0.0–1.0).
    pub mutation_probability: f64,

    /// Convergence threshold on the population fitness sum.
    ///
    /// The loop stops once the absolute delta between consecutive
    /// generations' fitness sums is at or below this value.
    pub stop_threshold: f64,

    /// Optional hard bound on the number of generations.
    ///
    /// `None` (the default) runs until convergence alone, which is not
    /// guaranteed to terminate if fitness sums keep oscillating above
    /// `stop_threshold`.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// The ordered item list. Decision bit `i` controls `items[i]`.
    pub items: Vec<Item>,
}

impl ProblemParams {
    /// Creates a configuration for the given instance with default
    /// algorithm parameters: population 100, crossover probability 0.5,
    /// mutation probability 0.05, stop threshold 0.5, no generation cap.
    pub fn new(max_weight: f64, items: Vec<Item>) -> Self {
        Self {
            max_weight,
            population_size: 100,
            crossover_probability: 0.5,
            mutation_probability: 0.05,
            stop_threshold: 0.5,
            max_generations: None,
            seed: None,
            items,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p;
        self
    }

    /// Sets the per-bit mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the convergence threshold.
    pub fn with_stop_threshold(mut self, threshold: f64) -> Self {
        self.stop_threshold = threshold;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of bits in every decision, i.e. the item count.
    pub fn decision_size(&self) -> usize {
        self.items.len()
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    /// Out-of-range values are rejected rather than clamped so that
    /// configuration mistakes surface before a run starts.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(format!(
                "crossover_probability must be in [0, 1], got {}",
                self.crossover_probability
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(format!(
                "mutation_probability must be in [0, 1], got {}",
                self.mutation_probability
            ));
        }
        if !(self.stop_threshold >= 0.0) {
            return Err(format!(
                "stop_threshold must be non-negative, got {}",
                self.stop_threshold
            ));
        }
        if self.items.is_empty() {
            return Err("items must not be empty".into());
        }
        if self.max_generations == Some(0) {
            return Err("max_generations must be positive or None".into());
        }
        Ok(())
    }
}
