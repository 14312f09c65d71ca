//! Genetic operators on decision populations.
//!
//! Both operators return freshly built populations: a new generation never
//! aliases the one it was derived from, so mutating the output cannot touch
//! the input.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use crate::config::ProblemParams;
use crate::population::random_decision;
use crate::types::{Decision, Population};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Uniform bit-mask crossover over random distinct pairs.
///
/// Starts from a deep copy of the input and performs `population_size / 2`
/// independent recombination attempts. Each attempt runs with probability
/// `crossover_probability`; when it runs, two distinct individuals are
/// picked uniformly from the whole population and their bits are swapped at
/// every position where a fresh random mask is set. The same individual may
/// take part in several attempts.
///
/// A population with fewer than 2 individuals cannot form a pair and is
/// returned as an unchanged copy.
pub fn crossover<R: Rng>(
    population: &[Decision],
    params: &ProblemParams,
    rng: &mut R,
) -> Population {
    let mut result: Population = population.to_vec();
    if result.len() < 2 {
        return result;
    }

    for _ in 0..result.len() / 2 {
        if rng.random_range(0.0..1.0) >= params.crossover_probability {
            continue;
        }

        let (father, mother) = unique_pair(result.len(), rng);
        let mask = random_decision(result[father].len(), rng);

        for (i, &swap) in mask.iter().enumerate() {
            if !swap {
                continue;
            }
            let bit = result[father][i];
            result[father][i] = result[mother][i];
            result[mother][i] = bit;
        }
    }

    result
}

/// Picks two distinct indices uniformly at random from `0..n`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn unique_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "cannot pick a distinct pair from fewer than 2 individuals");

    let first = rng.random_range(0..n);
    let mut second = rng.random_range(0..n - 1);
    if second >= first {
        second += 1;
    }
    (first, second)
}

// ============================================================================
// Mutation
// ============================================================================

/// Independent per-bit flip mutation.
///
/// Starts from a deep copy; every bit of every decision flips with
/// probability `mutation_probability`. The flip is constraint-blind: a
/// mutation may push a decision over the weight limit, in which case
/// fitness evaluation penalizes it to 0 rather than the flip being rejected.
pub fn mutate<R: Rng>(population: &[Decision], params: &ProblemParams, rng: &mut R) -> Population {
    population
        .iter()
        .map(|decision| {
            decision
                .iter()
                .map(|&bit| {
                    if rng.random_range(0.0..1.0) < params.mutation_probability {
                        !bit
                    } else {
                        bit
                    }
                })
                .collect()
        })
        .collect()
}
