//! Selection operators
//!
//! Truncation keeps the lowest-scoring half of a generation as the parent
//! pool; parents are then drawn from a [`ParentPool`] in pairs.

use rand::Rng;

use crate::population::population::Population;

/// Truncation selection
///
/// Keeps the `floor(n / 2)` lowest-scoring chromosomes. Equal scores keep
/// their population order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TruncationSelection;

impl TruncationSelection {
    /// Create a new truncation selection
    pub fn new() -> Self {
        Self
    }

    /// Size of the surviving pool for a population of `population_size`
    pub fn pool_size(&self, population_size: usize) -> usize {
        population_size / 2
    }

    /// Indices of the survivors, most fit first
    pub fn select(&self, population: &Population) -> Vec<usize> {
        let mut ranked = population.ranked();
        ranked.truncate(self.pool_size(population.len()));
        ranked
    }
}

/// Parent pool holding at least two members
#[derive(Clone, Debug, PartialEq)]
pub struct ParentPool<T> {
    members: Vec<T>,
}

impl<T> ParentPool<T> {
    /// Smallest pool that can yield two distinct parents
    pub const MIN_SIZE: usize = 2;

    /// Wrap `members`, or `None` if there are fewer than two
    pub fn new(members: Vec<T>) -> Option<Self> {
        if members.len() < Self::MIN_SIZE {
            return None;
        }
        Some(Self { members })
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the pool has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in selection order
    pub fn members(&self) -> &[T] {
        &self.members
    }

    /// Draw two distinct members uniformly, without replacement
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> (&T, &T) {
        let n = self.members.len();
        let first = rng.gen_range(0..n);
        let mut second = rng.gen_range(0..n - 1);
        if second >= first {
            second += 1;
        }
        (&self.members[first], &self.members[second])
    }
}
