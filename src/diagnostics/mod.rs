//! Diagnostics and reporting
//!
//! Per-generation report rows, the best-so-far record and the result of a
//! whole run. `Display` implementations render the two-decimal text a results
//! table and label show.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::genome::chromosome::{Chromosome, GENE_COUNT};
use crate::termination::TerminationReason;

/// One chromosome of an evaluated generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// 1-based position in the population
    pub rank: usize,
    /// Objective value
    #[serde(with = "unbounded_score")]
    pub score: f64,
    /// The three genes
    pub genes: [f64; GENE_COUNT],
}

impl ReportRow {
    /// Create a row for the chromosome at 1-based position `rank`
    pub fn new(rank: usize, score: f64, chromosome: &Chromosome) -> Self {
        Self {
            rank,
            score,
            genes: *chromosome.genes(),
        }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6} {:>12.2} {:>10.2} {:>10.2} {:>10.2}",
            self.rank, self.score, self.genes[0], self.genes[1], self.genes[2]
        )
    }
}

/// Every chromosome of one generation, as evaluated, in population order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Generation number, starting at 0
    pub generation: usize,
    /// One row per chromosome
    pub rows: Vec<ReportRow>,
}

impl GenerationReport {
    /// Create a report
    pub fn new(generation: usize, rows: Vec<ReportRow>) -> Self {
        Self { generation, rows }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the report has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lowest score in the report
    pub fn min_score(&self) -> Option<f64> {
        self.rows.iter().map(|r| r.score).min_by(f64::total_cmp)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:>12} {:>10} {:>10} {:>10}",
            "Rank", "Score", "Gene 1", "Gene 2", "Gene 3"
        )?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Lowest score seen so far across all evaluated generations
///
/// Starts empty with a score of `+inf` and only ever moves to a strictly lower
/// score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestSoFar {
    /// The chromosome, `None` until something is recorded
    pub chromosome: Option<Chromosome>,
    /// Its score
    #[serde(with = "unbounded_score")]
    pub score: f64,
}

impl BestSoFar {
    /// An empty record
    pub fn new() -> Self {
        Self {
            chromosome: None,
            score: f64::INFINITY,
        }
    }

    /// Replace the record if `score` is strictly lower; returns whether it did
    pub fn offer(&mut self, chromosome: &Chromosome, score: f64) -> bool {
        if score < self.score {
            self.chromosome = Some(*chromosome);
            self.score = score;
            true
        } else {
            false
        }
    }

    /// Check if anything has been recorded
    pub fn is_set(&self) -> bool {
        self.chromosome.is_some()
    }
}

impl Default for BestSoFar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BestSoFar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.chromosome {
            Some(c) => write!(
                f,
                "Best solution: x1={:.2}, x2={:.2}, x3={:.2}\nFunction value: {:.2}",
                c[0], c[1], c[2], self.score
            ),
            None => write!(f, "Best solution: none"),
        }
    }
}

/// Result of an evolution run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Best chromosome and score across every completed generation
    pub best: BestSoFar,
    /// Number of generations evaluated
    pub generations: usize,
    /// Total objective evaluations
    pub evaluations: usize,
    /// Best-so-far score after each completed generation
    #[serde(with = "unbounded_scores")]
    pub best_history: Vec<f64>,
    /// Report of the last evaluated generation
    pub final_report: Option<GenerationReport>,
    /// Why the run stopped
    pub termination_reason: TerminationReason,
    /// Wall-clock runtime in milliseconds
    pub total_runtime_ms: f64,
}

impl EvolutionResult {
    /// Best chromosome, if any generation was evaluated
    pub fn best_chromosome(&self) -> Option<&Chromosome> {
        self.best.chromosome.as_ref()
    }

    /// Best score, `+inf` if nothing was evaluated
    pub fn best_score(&self) -> f64 {
        self.best.score
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Get a summary of the evolution run
    pub fn summary(&self) -> String {
        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Evaluations: {}\n\
             - Best score: {:.6}\n\
             - Runtime: {:.2}ms\n\
             - Termination: {}",
            self.generations,
            self.evaluations,
            self.best.score,
            self.total_runtime_ms,
            self.termination_reason
        )
    }
}

/// Scores are stored as JSON `null` when not finite and read back as `+inf`
mod unbounded_score {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        score.is_finite().then_some(*score).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

mod unbounded_scores {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(scores: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(scores.iter().map(|s| s.is_finite().then_some(*s)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let scores = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(scores
            .into_iter()
            .map(|s| s.unwrap_or(f64::INFINITY))
            .collect())
    }
}

pub mod prelude {
    pub use super::{BestSoFar, EvolutionResult, GenerationReport, ReportRow};
}
