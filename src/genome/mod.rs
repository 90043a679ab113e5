//! Genome representation
//!
//! This module provides the three-gene chromosome and its sampling bounds.

pub mod bounds;
pub mod chromosome;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::chromosome::*;
}
