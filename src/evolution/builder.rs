//! # EvolutionLauncherBuilder
//!
//! Assembles an `EvolutionLauncher` part by part. `standard()` fills in the
//! usual boat setup (single point crossover, roulette pairing and
//! `area / density^2`), and any part can be swapped afterwards.
//!
//! ```rust
//! use boatga::evolution::EvolutionLauncherBuilder;
//!
//! let launcher = EvolutionLauncherBuilder::standard()
//!     .with_fitness_exponent(3)
//!     .build()
//!     .unwrap();
//! ```

use crate::{
    breeding::{BreedStrategy, SinglePointCrossover},
    error::{BoatError, Result},
    selection::{RouletteWheelSelection, SelectionStrategy},
};

use super::{Challenge, EvolutionLauncher, FitnessFormula};

#[derive(Debug, Clone)]
pub struct EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    C: Challenge + Clone + Send + Sync,
{
    breed_strategy: Option<B>,
    selection_strategy: Option<S>,
    challenge: Option<C>,
}

impl<B, S, C> EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    C: Challenge + Clone + Send + Sync,
{
    /// Starts with no parts set.
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            selection_strategy: None,
            challenge: None,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    /// Builds the launcher.
    ///
    /// # Errors
    ///
    /// Returns `BoatError::Configuration` naming every part that was not set.
    pub fn build(self) -> Result<EvolutionLauncher<B, S, C>> {
        match (self.breed_strategy, self.selection_strategy, self.challenge) {
            (Some(breed_strategy), Some(selection_strategy), Some(challenge)) => Ok(
                EvolutionLauncher::new(breed_strategy, selection_strategy, challenge),
            ),
            (breed_strategy, selection_strategy, challenge) => {
                let missing: Vec<&str> = [
                    (breed_strategy.is_none(), "breeding strategy"),
                    (selection_strategy.is_none(), "selection strategy"),
                    (challenge.is_none(), "challenge"),
                ]
                .iter()
                .filter(|(absent, _)| *absent)
                .map(|(_, part)| *part)
                .collect();
                Err(BoatError::Configuration(format!(
                    "Launcher is missing: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

impl<B, S> EvolutionLauncherBuilder<B, S, FitnessFormula>
where
    B: BreedStrategy,
    S: SelectionStrategy,
{
    /// Scores boats as `area / density^exponent`.
    pub fn with_fitness_exponent(self, exponent: i32) -> Self {
        self.with_challenge(FitnessFormula::area_over_density_pow(exponent))
    }

    /// Scores boats as `1 / density`, ignoring their area.
    pub fn with_inverse_density(self) -> Self {
        self.with_challenge(FitnessFormula::InverseDensity)
    }
}

impl EvolutionLauncherBuilder<SinglePointCrossover, RouletteWheelSelection, FitnessFormula> {
    /// The usual boat setup, ready to build.
    pub fn standard() -> Self {
        Self::new()
            .with_breed_strategy(SinglePointCrossover::new())
            .with_selection_strategy(RouletteWheelSelection::new())
            .with_challenge(FitnessFormula::default())
    }
}

impl<B, S, C> Default for EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    C: Challenge + Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
