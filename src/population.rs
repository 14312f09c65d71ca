//! Population initialization.

use crate::types::{Decision, Population};
use rand::Rng;

/// Creates a decision with every bit drawn from an independent fair coin.
pub fn random_decision<R: Rng>(decision_size: usize, rng: &mut R) -> Decision {
    (0..decision_size).map(|_| rng.random_bool(0.5)).collect()
}

/// Creates `population_size` independent random decisions of length
/// `decision_size`.
pub fn initialize<R: Rng>(decision_size: usize, population_size: usize, rng: &mut R) -> Population {
    (0..population_size)
        .map(|_| random_decision(decision_size, rng))
        .collect()
}
