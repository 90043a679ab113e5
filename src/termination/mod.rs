//! Termination criteria
//!
//! A run ends after a fixed number of generations, or earlier if its observer
//! asks it to stop between generations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The configured number of generations completed
    GenerationLimit,
    /// The observer requested a stop between generations
    Cancelled,
    /// Truncation left fewer than two parents
    NoParents,
}

impl TerminationReason {
    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::GenerationLimit => "Maximum generations reached",
            Self::Cancelled => "Cancelled by observer",
            Self::NoParents => "Too few survivors to breed",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Terminate after a maximum number of generations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxGenerations(pub usize);

impl MaxGenerations {
    /// Create a new max generations criterion
    pub fn new(max: usize) -> Self {
        Self(max)
    }

    /// Check whether `completed` generations exhaust the budget
    pub fn should_terminate(&self, completed: usize) -> bool {
        completed >= self.0
    }

    /// Get a description of why termination occurred
    pub fn reason(&self) -> TerminationReason {
        TerminationReason::GenerationLimit
    }
}

pub mod prelude {
    pub use super::{MaxGenerations, TerminationReason};
}
