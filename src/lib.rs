pub mod breeding;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod individual;
pub mod item;
pub mod pool;
pub mod population;
pub mod rng;
pub mod selection;
pub mod stash;
pub mod validation;

// Re-export commonly used types for convenience
pub use breeding::{BreedStrategy, SinglePointCrossover, StashMutation};
pub use error::{BoatError, OptionExt, Result, ResultExt};
pub use evolution::{Challenge, EvolutionLauncher, EvolutionOptions, FitnessFormula};
pub use individual::Individual;
pub use item::{Category, Item};
pub use pool::ItemPool;
pub use selection::{RouletteWheelSelection, SelectionStrategy};
