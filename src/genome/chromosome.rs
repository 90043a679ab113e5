//! Three-gene real-valued chromosome
//!
//! A candidate solution is a plain value: three reals with no identity beyond
//! their position in a population.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::bounds::GeneBounds;

/// Number of genes in every chromosome
pub const GENE_COUNT: usize = 3;

/// Fixed-length real-valued chromosome `(x0, x1, x2)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    genes: [f64; GENE_COUNT],
}

impl Chromosome {
    /// Create a chromosome from its three genes
    pub fn new(genes: [f64; GENE_COUNT]) -> Self {
        Self { genes }
    }

    /// Create a zero-filled chromosome
    pub fn zeros() -> Self {
        Self::filled(0.0)
    }

    /// Create a chromosome with every gene set to `value`
    pub fn filled(value: f64) -> Self {
        Self {
            genes: [value; GENE_COUNT],
        }
    }

    /// Sample every gene independently and uniformly from `bounds`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: &GeneBounds) -> Self {
        Self {
            genes: std::array::from_fn(|_| bounds.sample(rng)),
        }
    }

    /// Get a reference to the genes
    pub fn genes(&self) -> &[f64; GENE_COUNT] {
        &self.genes
    }

    /// Get the underlying array
    pub fn into_inner(self) -> [f64; GENE_COUNT] {
        self.genes
    }

    /// Element-wise mean of two chromosomes
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            genes: std::array::from_fn(|i| (self.genes[i] + other.genes[i]) / 2.0),
        }
    }

    /// Add `delta` gene by gene
    pub fn perturb(&mut self, delta: [f64; GENE_COUNT]) {
        for (gene, d) in self.genes.iter_mut().zip(delta) {
            *gene += d;
        }
    }

    /// Euclidean distance to another chromosome
    pub fn distance(&self, other: &Self) -> f64 {
        self.genes
            .iter()
            .zip(other.genes.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Check every gene against `bounds`
    pub fn within(&self, bounds: &GeneBounds) -> bool {
        self.genes.iter().all(|&g| bounds.contains(g))
    }
}

impl std::ops::Index<usize> for Chromosome {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl std::ops::IndexMut<usize> for Chromosome {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.genes[index]
    }
}

impl From<[f64; GENE_COUNT]> for Chromosome {
    fn from(genes: [f64; GENE_COUNT]) -> Self {
        Self { genes }
    }
}

impl From<Chromosome> for [f64; GENE_COUNT] {
    fn from(chromosome: Chromosome) -> Self {
        chromosome.genes
    }
}

impl<'a> IntoIterator for &'a Chromosome {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_chromosome_new() {
        let c = Chromosome::new([1.0, 2.0, 3.0]);
        assert_eq!(c.genes(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_chromosome_zeros_and_filled() {
        assert_eq!(Chromosome::zeros().genes(), &[0.0; 3]);
        assert_eq!(Chromosome::filled(42.0).genes(), &[42.0; 3]);
    }

    #[test]
    fn test_chromosome_random_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GeneBounds::new(-50.0, 50.0).unwrap();
        for _ in 0..200 {
            let c = Chromosome::random(&mut rng, &bounds);
            assert!(c.within(&bounds));
        }
    }

    #[test]
    fn test_chromosome_midpoint() {
        let p1 = Chromosome::zeros();
        let p2 = Chromosome::filled(2.0);
        assert_eq!(p1.midpoint(&p2), Chromosome::new([1.0, 1.0, 1.0]));
        assert_eq!(p2.midpoint(&p1), p1.midpoint(&p2));
    }

    #[test]
    fn test_chromosome_perturb() {
        let mut c = Chromosome::new([1.0, 2.0, 3.0]);
        c.perturb([0.5, -1.0, 0.0]);
        assert_eq!(c.genes(), &[1.5, 1.0, 3.0]);
    }

    #[test]
    fn test_chromosome_distance() {
        let a = Chromosome::zeros();
        let b = Chromosome::new([3.0, 4.0, 0.0]);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn test_chromosome_indexing() {
        let mut c = Chromosome::new([1.0, 2.0, 3.0]);
        assert_eq!(c[0], 1.0);
        assert_eq!(c[2], 3.0);
        c[1] = 42.0;
        assert_eq!(c[1], 42.0);
    }

    #[test]
    fn test_chromosome_serialization() {
        let c = Chromosome::new([4.0, -3.0, -0.5]);
        let json = serde_json::to_string(&c).unwrap();
        let back: Chromosome = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
