//! Genetic-algorithm solver for the 0/1 knapsack problem.
//!
//! Given a set of items, each with a value and a weight, and a maximum total
//! weight, the solver searches for a subset maximizing total value without
//! exceeding the capacity. Candidate solutions are boolean inclusion vectors
//! ([`Decision`]) evolved through fitness-proportionate selection, uniform
//! bit-mask crossover, and independent bit-flip mutation until the population
//! fitness sum stops changing by more than a configured threshold.
//!
//! # Key Types
//!
//! - [`Item`]: one candidate good, a `(value, weight)` pair
//! - [`ProblemParams`]: problem instance plus algorithm parameters
//! - [`Solver`]: executes the evolutionary loop
//! - [`SolveResult`]: final solution with run statistics
//!
//! # Operations
//!
//! The stochastic building blocks ([`initialize`], [`select`], [`crossover`],
//! [`mutate`]) are plain functions taking an explicit `&mut impl Rng`, so
//! every run can be made reproducible by seeding.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::{Item, ProblemParams, Solver};
//!
//! let params = ProblemParams::new(
//!     10.0,
//!     vec![Item::new(5.0, 4.0), Item::new(3.0, 7.0), Item::new(2.0, 6.0)],
//! )
//! .with_population_size(20)
//! .with_max_generations(50)
//! .with_seed(42);
//!
//! let result = Solver::run(&params);
//! assert_eq!(result.best.len(), 3);
//! assert!(result.best_fitness >= 0.0);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod config;
mod fitness;
mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::ProblemParams;
pub use fitness::{assess_population, fitness};
pub use operators::{crossover, mutate, unique_pair};
pub use population::{initialize, random_decision};
pub use runner::{best_decision, SolveResult, Solver};
pub use selection::select;
pub use types::{Decision, Item, Population};
