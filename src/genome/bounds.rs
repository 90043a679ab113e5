//! Bounds for initial gene sampling
//!
//! Every gene of a freshly initialized chromosome is drawn uniformly from the
//! same closed interval. Offspring are not clamped back into it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_GENE_MAX, DEFAULT_GENE_MIN};
use crate::error::{ConfigResult, ConfigurationError};

/// Closed interval `[min, max]` shared by all three genes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneBounds {
    /// Lower bound (inclusive)
    min: f64,
    /// Upper bound (inclusive)
    max: f64,
}

impl GeneBounds {
    /// Create new bounds, rejecting non-finite or inverted intervals
    ///
    /// The width `max - min` must also be finite for uniform sampling.
    pub fn new(min: f64, max: f64) -> ConfigResult<Self> {
        if !min.is_finite() {
            return Err(ConfigurationError::NonFinite {
                field: "gene_min",
                value: min,
            });
        }
        if !max.is_finite() {
            return Err(ConfigurationError::NonFinite {
                field: "gene_max",
                value: max,
            });
        }
        if min >= max {
            return Err(ConfigurationError::InvertedBounds { min, max });
        }
        let range = max - min;
        if !range.is_finite() {
            return Err(ConfigurationError::NonFinite {
                field: "gene_range",
                value: range,
            });
        }
        Ok(Self { min, max })
    }

    /// Create symmetric bounds centered at 0
    pub fn symmetric(half_width: f64) -> ConfigResult<Self> {
        Self::new(-half_width, half_width)
    }

    /// Lower bound
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Get the center point
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Draw one value uniformly from the interval
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for GeneBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_GENE_MIN,
            max: DEFAULT_GENE_MAX,
        }
    }
}

impl TryFrom<(f64, f64)> for GeneBounds {
    type Error = ConfigurationError;

    fn try_from((min, max): (f64, f64)) -> ConfigResult<Self> {
        Self::new(min, max)
    }
}
