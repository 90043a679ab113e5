//! Mutation operators

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::genome::chromosome::Chromosome;

/// Additive uniform perturbation
///
/// One Bernoulli trial per child decides whether it mutates. A mutated child
/// gets an independent draw from `[-half_width, half_width)` added to every
/// gene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformPerturbation {
    /// Probability that a child is mutated, in `[0, 1]`
    pub probability: f64,
    /// Half-width of the per-gene perturbation
    pub half_width: f64,
}

impl UniformPerturbation {
    /// Create a perturbation with the given probability and unit half-width
    pub fn new(probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        Self {
            probability,
            half_width: 1.0,
        }
    }

    /// Create from a percentage rate
    pub fn from_rate(rate_percent: f64) -> Self {
        Self::new(rate_percent / 100.0)
    }

    /// Set the perturbation half-width
    pub fn with_half_width(mut self, half_width: f64) -> Self {
        assert!(half_width > 0.0, "Half-width must be positive");
        self.half_width = half_width;
        self
    }

    /// Perturb `chromosome` in place; returns whether it was mutated
    pub fn mutate<R: Rng + ?Sized>(&self, chromosome: &mut Chromosome, rng: &mut R) -> bool {
        if rng.gen::<f64>() >= self.probability {
            return false;
        }
        let noise = Uniform::new(-self.half_width, self.half_width);
        chromosome.perturb(std::array::from_fn(|_| noise.sample(rng)));
        true
    }
}
