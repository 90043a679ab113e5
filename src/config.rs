//! Run configuration
//!
//! A `Configuration` is built once, validated up front and never changes
//! during a run. It can be assembled three ways: fluently through
//! [`ConfigurationBuilder`], from a JSON document, or from the raw text of a
//! parameter form via [`TextFields`].

use serde::{Deserialize, Serialize};

use crate::error::{ConfigResult, ConfigurationError};
use crate::genome::bounds::GeneBounds;

/// Default mutation rate, in percent
pub const DEFAULT_MUTATION_RATE: f64 = 20.0;
/// Default number of chromosomes per generation
pub const DEFAULT_POPULATION_SIZE: usize = 50;
/// Default number of generations
pub const DEFAULT_GENERATION_COUNT: usize = 100;
/// Default lower bound for initial genes
pub const DEFAULT_GENE_MIN: f64 = -50.0;
/// Default upper bound for initial genes
pub const DEFAULT_GENE_MAX: f64 = 50.0;

/// Validated, immutable parameters of one run
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Configuration {
    mutation_rate: f64,
    population_size: usize,
    generation_count: usize,
    bounds: GeneBounds,
}

impl Configuration {
    /// Start an empty builder
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Load a configuration from a JSON object with the five fields
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let builder: ConfigurationBuilder = serde_json::from_str(json)?;
        builder.build()
    }

    /// Mutation rate in percent, within `[0, 100]`
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Probability that a single offspring is mutated
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_rate / 100.0
    }

    /// Number of chromosomes in every generation
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Number of generations to run
    pub fn generation_count(&self) -> usize {
        self.generation_count
    }

    /// Bounds for initial gene sampling
    pub fn bounds(&self) -> GeneBounds {
        self.bounds
    }

    /// Lower gene bound
    pub fn gene_min(&self) -> f64 {
        self.bounds.min()
    }

    /// Upper gene bound
    pub fn gene_max(&self) -> f64 {
        self.bounds.max()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mutation_rate: DEFAULT_MUTATION_RATE,
            population_size: DEFAULT_POPULATION_SIZE,
            generation_count: DEFAULT_GENERATION_COUNT,
            bounds: GeneBounds::default(),
        }
    }
}

/// Builder for [`Configuration`]
///
/// Every field starts unset; `build` reports the first missing or invalid one.
/// Counts are held signed so that negative input is reported as
/// "must be positive" rather than lost in a conversion.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigurationBuilder {
    mutation_rate: Option<f64>,
    population_size: Option<i64>,
    generation_count: Option<i64>,
    gene_min: Option<f64>,
    gene_max: Option<f64>,
}

impl ConfigurationBuilder {
    /// Create a builder with no fields set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder pre-filled with the defaults
    pub fn with_defaults() -> Self {
        Self {
            mutation_rate: Some(DEFAULT_MUTATION_RATE),
            population_size: Some(DEFAULT_POPULATION_SIZE as i64),
            generation_count: Some(DEFAULT_GENERATION_COUNT as i64),
            gene_min: Some(DEFAULT_GENE_MIN),
            gene_max: Some(DEFAULT_GENE_MAX),
        }
    }

    /// Set the mutation rate, in percent
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: i64) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the number of generations
    pub fn generation_count(mut self, count: i64) -> Self {
        self.generation_count = Some(count);
        self
    }

    /// Set both gene bounds
    pub fn gene_bounds(mut self, min: f64, max: f64) -> Self {
        self.gene_min = Some(min);
        self.gene_max = Some(max);
        self
    }

    /// Set the lower gene bound
    pub fn gene_min(mut self, min: f64) -> Self {
        self.gene_min = Some(min);
        self
    }

    /// Set the upper gene bound
    pub fn gene_max(mut self, max: f64) -> Self {
        self.gene_max = Some(max);
        self
    }

    /// Validate and freeze the configuration
    pub fn build(self) -> ConfigResult<Configuration> {
        let mutation_rate = self
            .mutation_rate
            .ok_or(ConfigurationError::Missing("mutation_rate"))?;
        if !mutation_rate.is_finite() {
            return Err(ConfigurationError::NonFinite {
                field: "mutation_rate",
                value: mutation_rate,
            });
        }
        if !(0.0..=100.0).contains(&mutation_rate) {
            return Err(ConfigurationError::MutationRateOutOfRange(mutation_rate));
        }

        let population_size = positive(
            "population_size",
            self.population_size
                .ok_or(ConfigurationError::Missing("population_size"))?,
        )?;
        let generation_count = positive(
            "generation_count",
            self.generation_count
                .ok_or(ConfigurationError::Missing("generation_count"))?,
        )?;

        let gene_min = self.gene_min.ok_or(ConfigurationError::Missing("gene_min"))?;
        let gene_max = self.gene_max.ok_or(ConfigurationError::Missing("gene_max"))?;
        let bounds = GeneBounds::new(gene_min, gene_max)?;

        Ok(Configuration {
            mutation_rate,
            population_size,
            generation_count,
            bounds,
        })
    }
}

fn positive(field: &'static str, value: i64) -> ConfigResult<usize> {
    if value < 1 {
        return Err(ConfigurationError::NotPositive { field, value });
    }
    usize::try_from(value).map_err(|_| ConfigurationError::NotPositive { field, value })
}

/// Raw text of the five parameter inputs, as typed by a user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFields {
    /// Mutation probability, percent
    pub mutation_rate: String,
    /// Number of chromosomes
    pub population_size: String,
    /// Number of generations
    pub generation_count: String,
    /// Minimum gene value
    pub gene_min: String,
    /// Maximum gene value
    pub gene_max: String,
}

impl TextFields {
    /// Fields pre-filled with the default values
    pub fn with_defaults() -> Self {
        Self {
            mutation_rate: DEFAULT_MUTATION_RATE.to_string(),
            population_size: DEFAULT_POPULATION_SIZE.to_string(),
            generation_count: DEFAULT_GENERATION_COUNT.to_string(),
            gene_min: DEFAULT_GENE_MIN.to_string(),
            gene_max: DEFAULT_GENE_MAX.to_string(),
        }
    }

    /// Parse and validate every field
    pub fn parse(&self) -> ConfigResult<Configuration> {
        ConfigurationBuilder::new()
            .mutation_rate(parse_field("mutation_rate", &self.mutation_rate)?)
            .population_size(parse_field("population_size", &self.population_size)?)
            .generation_count(parse_field("generation_count", &self.generation_count)?)
            .gene_min(parse_field("gene_min", &self.gene_min)?)
            .gene_max(parse_field("gene_max", &self.gene_max)?)
            .build()
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, raw: &str) -> ConfigResult<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigurationError::Missing(field));
    }
    trimmed
        .parse()
        .map_err(|_| ConfigurationError::NotNumeric {
            field,
            value: raw.to_string(),
        })
}
