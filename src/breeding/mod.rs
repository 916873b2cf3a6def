//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies that turn a
//! mating list into the children of the next generation, and the mutation
//! that feeds fresh stock into a boat.
pub mod crossover;
pub mod mutation;

use std::fmt::Debug;

use crate::{
    error::Result,
    individual::{IdGenerator, Individual},
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Breeds children from a mating list laid out as consecutive pairs.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds new individuals from `parents`.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The mating list; elements 0 and 1 mate, then 2 and 3, and so on.
    /// - `ids`: The generator the children's ids are minted from.
    /// - `rng`: The random number generator used for cut points.
    ///
    /// ## Errors
    ///
    /// This method can fail if the mating list cannot be paired up.
    fn breed(
        &self,
        parents: &[&Individual],
        ids: &mut IdGenerator,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

pub use crossover::SinglePointCrossover;
pub use mutation::StashMutation;
