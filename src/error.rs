//! Error types for quadratic-evo
//!
//! Configuration is the only thing that can fail. Once a `GenerationalGA`
//! has been built, a run always completes.

use thiserror::Error;

/// Error raised when a run configuration is missing, unparsable or out of range
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A required field was never supplied
    #[error("Missing configuration field: {0}")]
    Missing(&'static str),

    /// A text field could not be parsed as a number
    #[error("Field {field} is not a valid number: {value:?}")]
    NotNumeric { field: &'static str, value: String },

    /// A count that must be at least one was zero or negative
    #[error("Field {field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: i64 },

    /// Mutation rate is a percentage
    #[error("Mutation rate must lie in [0, 100], got {0}")]
    MutationRateOutOfRange(f64),

    /// A real-valued field was NaN or infinite
    #[error("Field {field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Gene bounds are empty or inverted
    #[error("Invalid gene bounds: min ({min}) must be < max ({max})")]
    InvertedBounds { min: f64, max: f64 },

    /// Truncation leaves fewer than two parents to pair
    #[error(
        "Selection pool of {pool} cannot supply two distinct parents \
         (population size {population_size}, need at least 4)"
    )]
    SelectionPoolTooSmall { pool: usize, population_size: usize },

    /// A serialized configuration could not be decoded
    #[error("Malformed configuration: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Result type alias for configuration handling
pub type ConfigResult<T> = Result<T, ConfigurationError>;
