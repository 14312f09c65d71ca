//! Demo binary: solves a fixed 9-item instance and prints the result.

use knapsack_ga::{Item, ProblemParams, Solver};

fn main() {
    let params = ProblemParams::new(
        30.0,
        vec![
            Item::new(8.0, 5.0),
            Item::new(9.0, 7.0),
            Item::new(6.0, 7.0),
            Item::new(10.0, 3.0),
            Item::new(5.0, 2.0),
            Item::new(8.0, 9.0),
            Item::new(9.0, 8.0),
            Item::new(4.0, 12.0),
            Item::new(4.0, 17.0),
        ],
    );

    let result = Solver::run(&params);

    let chosen: Vec<&Item> = params
        .items
        .iter()
        .zip(&result.best)
        .filter(|(_, &included)| included)
        .map(|(item, _)| item)
        .collect();
    let total_value: f64 = chosen.iter().map(|item| item.value).sum();
    let total_weight: f64 = chosen.iter().map(|item| item.weight).sum();

    println!("Generations: {}", result.generations);
    println!("Solution: {:?}", result.best);
    println!("Chosen items: {chosen:?}");
    println!("Total value: {total_value}");
    println!("Total weight: {total_weight}");
}
