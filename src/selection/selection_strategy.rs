use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for strategies that pick the mating list of the next generation.
///
/// Implementations return indices into `population`, laid out as consecutive
/// pairs: elements 0 and 1 mate, then 2 and 3, and so on. Working on indices
/// keeps the identity of each pick, so a strategy can tell two picks of the
/// same individual apart from two individuals that merely look alike.
///
/// # Examples
///
/// ```
/// use boatga::individual::Individual;
/// use boatga::rng::RandomNumberGenerator;
/// use boatga::selection::SelectionStrategy;
/// use boatga::error::Result;
///
/// #[derive(Debug)]
/// struct Neighbours;
///
/// impl SelectionStrategy for Neighbours {
///     fn select(&self, population: &[Individual], _rng: &mut RandomNumberGenerator) -> Result<Vec<usize>> {
///         Ok((0..population.len()).collect())
///     }
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects parents from a scored population.
    ///
    /// # Errors
    ///
    /// Implementations fail if the population cannot be sampled, for instance
    /// because it is empty or carries unusable fitness values.
    fn select(
        &self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>>;
}
