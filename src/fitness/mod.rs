//! Fitness evaluation
//!
//! This module provides the fixed objective being minimized.

pub mod objective;

pub mod prelude {
    pub use super::objective::{evaluate, QuadraticBowl};
}
