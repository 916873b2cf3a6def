use crate::error::{BoatError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Upper bound on the spins spent looking for a second parent.
pub const MAX_PARTNER_SPINS: usize = 100_000;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) picks
/// an individual with probability proportional to its fitness. All fitness values
/// must be non-negative and at least one must be positive.
///
/// Pairs are built from two spins; when the second spin lands on the same
/// individual as the first it is spun again. The same individual may still
/// appear in several different pairs.
///
/// # Examples
///
/// ```
/// use boatga::evolution::{FitnessFormula};
/// use boatga::fitness::FitnessEvaluator;
/// use boatga::individual::Individual;
/// use boatga::item::{Category, Item};
/// use boatga::rng::RandomNumberGenerator;
/// use boatga::selection::{RouletteWheelSelection, SelectionStrategy};
/// use boatga::error::Result;
///
/// fn main() -> Result<()> {
///     let mut population: Vec<Individual> = (1..=4)
///         .map(|id| Individual::new(id, vec![Item::new(id, Category::Wood, 100.0 * id as f64, 1.0, 0.5)], 0))
///         .collect();
///     FitnessEvaluator::new(FitnessFormula::default(), 1000).review(&mut population)?;
///
///     let mut rng = RandomNumberGenerator::from_seed(1);
///     let selected = RouletteWheelSelection::new().select(&population, &mut rng)?;
///
///     assert_eq!(selected.len(), 4);
///     for pair in selected.chunks(2) {
///         assert_ne!(pair[0], pair[1]);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Reads the fitness of every individual and checks it can be sampled from.
    ///
    /// # Errors
    ///
    /// Returns `BoatError::InvalidFitness` if an individual is unscored, or any
    /// fitness is negative or non-finite, or the total is not positive.
    fn fitness_values(&self, population: &[Individual]) -> Result<(Vec<f64>, f64)> {
        if population.is_empty() {
            return Err(BoatError::EmptyPopulation);
        }

        let mut values = Vec::with_capacity(population.len());
        for individual in population {
            let fitness = individual.fitness().ok_or_else(|| {
                BoatError::InvalidFitness(format!(
                    "Individual {} has not been scored",
                    individual.id()
                ))
            })?;
            if fitness < 0.0 || !fitness.is_finite() {
                return Err(BoatError::InvalidFitness(format!(
                    "Roulette wheel selection requires finite non-negative fitness, individual {} has {}",
                    individual.id(),
                    fitness
                )));
            }
            values.push(fitness);
        }

        let total: f64 = values.iter().sum();
        if total <= 0.0 {
            return Err(BoatError::InvalidFitness(
                "Roulette wheel selection requires at least one individual with non-zero fitness"
                    .to_string(),
            ));
        }

        Ok((values, total))
    }

    /// Spins the wheel once over precomputed fitness values.
    fn spin(&self, fitness: &[f64], total: f64, rng: &mut RandomNumberGenerator) -> usize {
        let pick = rng.gen_f64(0.0, total);
        let mut current = 0.0;
        for (index, &value) in fitness.iter().enumerate() {
            current += value;
            if current > pick {
                return index;
            }
        }

        // Rounding left the running sum at or below the pick; fall back to the
        // last individual that can actually win a spin.
        fitness.iter().rposition(|&value| value > 0.0).unwrap_or(0)
    }

    /// Spins until the wheel lands on someone other than `first`.
    ///
    /// When `first` holds nearly all of the total fitness the others may be
    /// unreachable in practice, so the spins are capped at `MAX_PARTNER_SPINS`.
    fn spin_partner(
        &self,
        fitness: &[f64],
        total: f64,
        first: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        for _ in 0..MAX_PARTNER_SPINS {
            let second = self.spin(fitness, total, rng);
            if second != first {
                return Ok(second);
            }
        }
        Err(BoatError::InvalidFitness(format!(
            "No partner for individual at index {} after {} spins, its fitness {} dominates a total of {}",
            first, MAX_PARTNER_SPINS, fitness[first], total
        )))
    }

    /// Picks one individual with probability proportional to its fitness.
    ///
    /// Returns the index of the picked individual.
    pub fn select_one(
        &self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let (fitness, total) = self.fitness_values(population)?;
        Ok(self.spin(&fitness, total, rng))
    }

    /// Builds a mating list of at least `population.len()` indices, two per pair.
    ///
    /// For an odd population the list is one longer than the population, since
    /// pairs are always completed.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`RouletteWheelSelection::select_one`], fails with
    /// `BoatError::InvalidFitness` when fewer than two individuals have positive
    /// fitness, as no pair of distinct individuals could then be drawn, or when
    /// one individual dominates the wheel so that no partner turns up within
    /// `MAX_PARTNER_SPINS` spins.
    #[tracing::instrument(level = "trace", skip_all, fields(population = population.len()))]
    pub fn select_pairs(
        &self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        let (fitness, total) = self.fitness_values(population)?;

        let viable = fitness.iter().filter(|&&value| value > 0.0).count();
        if viable < 2 {
            return Err(BoatError::InvalidFitness(format!(
                "At least two individuals need positive fitness to form a pair, found {}",
                viable
            )));
        }

        let mut selected = Vec::with_capacity(population.len() + 1);
        while selected.len() < population.len() {
            let first = self.spin(&fitness, total, rng);
            let second = self.spin_partner(&fitness, total, first, rng)?;
            selected.push(first);
            selected.push(second);
        }

        Ok(selected)
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(
        &self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        self.select_pairs(population, rng)
    }
}
