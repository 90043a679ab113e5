//! Population type
//!
//! A population is an ordered sequence of chromosomes for one generation plus,
//! once evaluated, the parallel vector of their scores. Index `i` of the
//! score vector and of the generation report refer to chromosome `i`.

use rand::Rng;

use crate::diagnostics::{GenerationReport, ReportRow};
use crate::fitness::objective;
use crate::genome::bounds::GeneBounds;
use crate::genome::chromosome::Chromosome;

/// The chromosomes of one generation
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    /// Chromosomes in insertion order
    chromosomes: Vec<Chromosome>,
    /// Scores parallel to `chromosomes`, empty until evaluated
    scores: Vec<f64>,
    /// Generation number
    generation: usize,
}

impl Population {
    /// Create a population from chromosomes for the given generation
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>, generation: usize) -> Self {
        Self {
            chromosomes,
            scores: Vec::new(),
            generation,
        }
    }

    /// Create a random generation-0 population
    pub fn random<R: Rng + ?Sized>(size: usize, bounds: &GeneBounds, rng: &mut R) -> Self {
        let chromosomes = (0..size)
            .map(|_| Chromosome::random(rng, bounds))
            .collect();
        Self::from_chromosomes(chromosomes, 0)
    }

    /// Get the generation number
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Get a chromosome by index
    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.chromosomes.get(index)
    }

    /// Get the chromosomes in order
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Scores parallel to [`chromosomes`](Self::chromosomes); empty before evaluation
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Check if every chromosome has a score
    pub fn is_evaluated(&self) -> bool {
        self.scores.len() == self.chromosomes.len()
    }

    /// Score every chromosome with the objective, preserving order
    pub fn evaluate(&mut self) {
        self.scores = self.chromosomes.iter().map(objective::evaluate).collect();
    }

    /// Index of the lowest score; the first one wins ties
    pub fn best_index(&self) -> Option<usize> {
        if !self.is_evaluated() {
            return None;
        }
        let mut best: Option<usize> = None;
        for (i, &score) in self.scores.iter().enumerate() {
            match best {
                Some(b) if score >= self.scores[b] => {}
                _ if score.is_nan() => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// The lowest-scoring chromosome and its score
    pub fn best(&self) -> Option<(&Chromosome, f64)> {
        self.best_index()
            .map(|i| (&self.chromosomes[i], self.scores[i]))
    }

    /// Indices ordered by ascending score; equal scores keep population order
    pub fn ranked(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.scores.len()).collect();
        indices.sort_by(|&a, &b| self.scores[a].total_cmp(&self.scores[b]));
        indices
    }

    /// Mean score, if evaluated and non-empty
    pub fn mean_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            None
        } else {
            Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
        }
    }

    /// One row per chromosome in population order, ranks starting at 1
    pub fn report(&self) -> GenerationReport {
        let rows = self
            .chromosomes
            .iter()
            .zip(self.scores.iter())
            .enumerate()
            .map(|(i, (chromosome, &score))| ReportRow::new(i + 1, score, chromosome))
            .collect();
        GenerationReport::new(self.generation, rows)
    }
}
