//! Crossover operators

use crate::genome::chromosome::Chromosome;

/// Arithmetic crossover with equal weights
///
/// The single child is the element-wise mean of its parents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeanCrossover;

impl MeanCrossover {
    /// Create a new mean crossover
    pub fn new() -> Self {
        Self
    }

    /// Produce one child from two parents
    pub fn crossover(&self, parent1: &Chromosome, parent2: &Chromosome) -> Chromosome {
        parent1.midpoint(parent2)
    }
}
