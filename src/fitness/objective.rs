//! The fixed objective
//!
//! `f(x) = 3(x0 - 4)^2 + 5(x1 + 3)^2 + 7(2 x2 + 1)^2`, to be minimized.
//! Strictly convex and separable with a unique minimum of 0 at `(4, -3, -0.5)`.

use crate::genome::chromosome::Chromosome;

/// Evaluate the objective for one chromosome (lower is better)
pub fn evaluate(chromosome: &Chromosome) -> f64 {
    let [x0, x1, x2] = *chromosome.genes();
    3.0 * (x0 - 4.0).powi(2) + 5.0 * (x1 + 3.0).powi(2) + 7.0 * (2.0 * x2 + 1.0).powi(2)
}

/// Descriptor of the objective's known optimum
#[derive(Clone, Copy, Debug, Default)]
pub struct QuadraticBowl;

impl QuadraticBowl {
    /// Location of the global minimum
    pub const OPTIMUM: [f64; 3] = [4.0, -3.0, -0.5];

    /// Objective value at the global minimum
    pub const OPTIMAL_SCORE: f64 = 0.0;

    /// Name of the objective
    pub fn name(&self) -> &'static str {
        "QuadraticBowl"
    }

    /// The optimum as a chromosome
    pub fn optimal_solution(&self) -> Chromosome {
        Chromosome::new(Self::OPTIMUM)
    }

    /// Euclidean distance from `chromosome` to the optimum
    pub fn distance_to_optimum(&self, chromosome: &Chromosome) -> f64 {
        chromosome.distance(&self.optimal_solution())
    }
}
