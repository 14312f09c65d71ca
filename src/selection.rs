//! Fitness-proportionate (roulette-wheel) selection.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::config::ProblemParams;
use crate::fitness::fitness;
use crate::types::{Decision, Population};
use rand::Rng;

/// Draws the next generation's parents: `population_size` individuals,
/// with replacement, each draw proportional to fitness.
///
/// When the total fitness is exactly 0 — no feasible individual, or all
/// feasible individuals worthless — there is no selection signal, and the
/// input population is returned unchanged (value-wise copy). This also
/// avoids dividing by a zero total.
///
/// Duplicate individuals in the output are expected and normal.
pub fn select<R: Rng>(population: &[Decision], params: &ProblemParams, rng: &mut R) -> Population {
    let weights: Vec<f64> = population
        .iter()
        .map(|decision| fitness(decision, params))
        .collect();
    let total: f64 = weights.iter().sum();

    if total == 0.0 {
        return population.to_vec();
    }

    (0..params.population_size)
        .map(|_| population[roulette_draw(&weights, total, rng)].clone())
        .collect()
}

/// One roulette draw: cumulative scan against a uniform threshold in
/// `[0, total)`.
fn roulette_draw<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    weights.len() - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// One item per slot so each decision's fitness is easy to dial in.
    fn params_with_values(values: &[f64]) -> ProblemParams {
        let items: Vec<Item> = values.iter().map(|&v| Item::new(v, 1.0)).collect();
        ProblemParams::new(values.len() as f64, items).with_population_size(4)
    }

    /// Decision that includes exactly one item.
    fn single(n: usize, idx: usize) -> Decision {
        (0..n).map(|i| i == idx).collect()
    }

    #[test]
    fn test_output_size_is_population_size() {
        let params = params_with_values(&[1.0, 2.0, 3.0, 4.0]).with_population_size(10);
        let population: Vec<Decision> = (0..4).map(|i| single(4, i)).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let selected = select(&population, &params, &mut rng);
        assert_eq!(selected.len(), 10);
        assert!(selected.iter().all(|d| d.len() == 4));
    }

    #[test]
    fn test_zero_total_fitness_returns_input_unchanged() {
        // Every item is heavier than the capacity, so any inclusion is
        // infeasible and the all-false decision is worth 0.
        let items = vec![Item::new(5.0, 100.0), Item::new(9.0, 100.0)];
        let params = ProblemParams::new(30.0, items).with_population_size(3);
        let population = vec![
            vec![true, false],
            vec![false, true],
            vec![true, true],
        ];
        let mut rng = StdRng::seed_from_u64(42);

        let selected = select(&population, &params, &mut rng);
        assert_eq!(selected, population);
    }

    #[test]
    fn test_higher_fitness_selected_more_often() {
        let params = params_with_values(&[1.0, 1.0, 8.0, 1.0]);
        let population: Vec<Decision> = (0..4).map(|i| single(4, i)).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..1000 {
            for decision in select(&population, &params, &mut rng) {
                let idx = decision.iter().position(|&b| b).unwrap();
                counts[idx] += 1;
            }
        }
        // Item 2 carries 8/11 of the total weight; it must dominate.
        assert!(
            counts[2] > counts[0] + counts[1] + counts[3],
            "expected index 2 to dominate, got {counts:?}"
        );
    }

    #[test]
    fn test_selection_is_with_replacement() {
        // Two individuals, ten draws: duplicates are unavoidable.
        let params = params_with_values(&[3.0, 5.0]).with_population_size(10);
        let population = vec![single(2, 0), single(2, 1)];
        let mut rng = StdRng::seed_from_u64(42);

        let selected = select(&population, &params, &mut rng);
        assert_eq!(selected.len(), 10);
        assert!(selected.iter().all(|d| population.contains(d)));
    }

    #[test]
    fn test_infeasible_individual_never_selected() {
        let items = vec![Item::new(10.0, 1.0), Item::new(100.0, 50.0)];
        let params = ProblemParams::new(5.0, items).with_population_size(8);
        let feasible = vec![true, false];
        let infeasible = vec![false, true]; // weight 50 > 5, fitness 0
        let population = vec![feasible.clone(), infeasible.clone()];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let selected = select(&population, &params, &mut rng);
            assert!(selected.iter().all(|d| *d == feasible));
        }
    }
}
