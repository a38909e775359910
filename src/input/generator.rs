//! Deterministic workload generators.
//!
//! Generators must be pure: two calls with the same `n` produce structurally
//! identical workloads, so any workload instance is interchangeable with
//! another for timing purposes.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Produces a fresh workload of a requested size.
pub trait InputGenerator {
    /// Element type of the workload.
    type Item;

    /// Build a workload of exactly `n` elements in O(n).
    fn generate(&self, n: usize) -> Vec<Self::Item>;
}

/// Ascending integers `0..n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl InputGenerator for Sequential {
    type Item = u64;

    fn generate(&self, n: usize) -> Vec<u64> {
        (0..n as u64).collect()
    }
}

/// Descending integers `n-1..=0`.
///
/// Useful as a worst case for algorithms that are adaptive to sorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed;

impl InputGenerator for Reversed {
    type Item = u64;

    fn generate(&self, n: usize) -> Vec<u64> {
        (0..n as u64).rev().collect()
    }
}

/// A seeded permutation of `0..n`.
///
/// Deterministic per seed: the same `(seed, n)` always yields the same order.
#[derive(Debug, Clone, Copy)]
pub struct Shuffled {
    /// Seed for the permutation.
    pub seed: u64,
}

impl Shuffled {
    /// Create a shuffled generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl InputGenerator for Shuffled {
    type Item = u64;

    fn generate(&self, n: usize) -> Vec<u64> {
        let mut values: Vec<u64> = (0..n as u64).collect();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);
        values.shuffle(&mut rng);
        values
    }
}

/// Generate the default workload (`0..n`) of size `n`.
pub fn generate(n: usize) -> Vec<u64> {
    Sequential.generate(n)
}
