//! # quadratic-evo
//!
//! A small generational genetic algorithm that searches for the
//! three-dimensional vector minimizing
//! `3(x0 - 4)^2 + 5(x1 + 3)^2 + 7(2 x2 + 1)^2`.
//!
//! Every generation the population is evaluated, reported to an observer,
//! truncated to its better half, and replaced by children that are the mean
//! of two distinct survivors, occasionally perturbed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quadratic_evo::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = Configuration::builder()
//!     .mutation_rate(20.0)
//!     .population_size(50)
//!     .generation_count(100)
//!     .gene_bounds(-50.0, 50.0)
//!     .build()?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut recorder = Recorder::new();
//! let result = GenerationalGA::new(config)?.run(&mut rng, &mut recorder);
//!
//! println!("{}", result.best);
//! # Ok::<(), ConfigurationError>(())
//! ```

pub mod algorithms;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod observer;
pub mod operators;
pub mod population;
pub mod termination;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::config::{Configuration, ConfigurationBuilder, TextFields};
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::observer::{ChannelObserver, GenerationObserver, Recorder, RunEvent};
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::termination::prelude::*;
}
