//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! run: pool draws, roulette spins, cut points and mutation positions all go
//! through it, so a seeded generator makes a whole run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use boatga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let index = rng.gen_index(10);
//! assert!(index < 10);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns an index uniformly distributed in `[0, len)`.
    ///
    /// `len` must be non-zero; callers check emptiness first.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Returns a value uniformly distributed in `[0, upper]`.
    pub fn gen_inclusive(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..=upper)
    }

    /// Returns a value uniformly distributed in `[from, to)`.
    ///
    /// A degenerate range (`from >= to`) yields `from`.
    pub fn gen_f64(&mut self, from: f64, to: f64) -> f64 {
        if from >= to {
            return from;
        }
        self.rng.gen_range(from..to)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
