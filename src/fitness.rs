//! Fitness evaluation.
//!
//! Feasibility is a hard constraint encoded as a fitness cliff: a decision
//! over the weight limit scores exactly 0, never a partial penalty.

use crate::config::ProblemParams;
use crate::types::Decision;

/// Evaluates one decision.
///
/// Sums `value` and `weight` over the included items. Returns the summed
/// value when the summed weight fits within `max_weight`, otherwise 0.
///
/// Deterministic, no side effects, O(items).
pub fn fitness(decision: &[bool], params: &ProblemParams) -> f64 {
    let mut value = 0.0;
    let mut weight = 0.0;
    for (item, &included) in params.items.iter().zip(decision) {
        if !included {
            continue;
        }
        value += item.value;
        weight += item.weight;
    }
    if weight <= params.max_weight {
        value
    } else {
        0.0
    }
}

/// Sums [`fitness`] over the whole population.
///
/// Used only for the generation-to-generation convergence delta, not for
/// per-individual ranking.
pub fn assess_population(population: &[Decision], params: &ProblemParams) -> f64 {
    population.iter().map(|decision| fitness(decision, params)).sum()
}
