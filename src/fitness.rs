//! # FitnessEvaluator
//!
//! Refreshes the derived metrics of individuals and finds the extremes of a
//! population. Scoring is a pure function of an individual's items, so large
//! populations are scored in parallel with rayon.

use rayon::prelude::*;

use crate::error::{BoatError, Result};
use crate::evolution::challenge::Challenge;
use crate::individual::{Individual, Metrics};

/// The best and worst individual of one evaluated population.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub best: Individual,
    pub worst: Individual,
}

#[derive(Debug, Clone)]
pub struct FitnessEvaluator<C> {
    challenge: C,
    parallel_threshold: usize,
}

impl<C> FitnessEvaluator<C>
where
    C: Challenge + Send + Sync,
{
    /// Creates an evaluator that scores sequentially below `parallel_threshold` individuals.
    pub fn new(challenge: C, parallel_threshold: usize) -> Self {
        Self {
            challenge,
            parallel_threshold,
        }
    }

    pub fn challenge(&self) -> &C {
        &self.challenge
    }

    /// Computes the metrics of `individual` from its items and stores them.
    ///
    /// # Errors
    ///
    /// - `BoatError::ZeroVolume` if the items have no volume at all.
    /// - `BoatError::FitnessCalculation` if the challenge yields NaN or infinity.
    pub fn score(&self, individual: &mut Individual) -> Result<()> {
        let metrics = self.metrics_for(individual)?;
        individual.set_metrics(metrics);
        Ok(())
    }

    fn metrics_for(&self, individual: &Individual) -> Result<Metrics> {
        let (area, total_mass, total_volume) = individual
            .items()
            .iter()
            .fold((0.0, 0.0, 0.0), |(a, m, v), item| {
                (a + item.area, m + item.mass, v + item.volume)
            });

        if total_volume <= 0.0 {
            return Err(BoatError::ZeroVolume {
                individual: individual.id(),
            });
        }

        let density = total_mass / total_volume;
        let fitness = self.challenge.score(area, density);
        if !fitness.is_finite() {
            return Err(BoatError::FitnessCalculation(format!(
                "Non-finite fitness score {} for individual {} (area {}, density {})",
                fitness,
                individual.id(),
                area,
                density
            )));
        }

        Ok(Metrics {
            area,
            total_mass,
            total_volume,
            density,
            fitness,
        })
    }

    /// Scores every individual and returns copies of the fittest and the least fit.
    ///
    /// Ties go to the individual seen first.
    ///
    /// # Errors
    ///
    /// Returns `BoatError::EmptyPopulation` for an empty population and any
    /// error produced by [`FitnessEvaluator::score`].
    pub fn review(&self, population: &mut [Individual]) -> Result<Review> {
        if population.is_empty() {
            return Err(BoatError::EmptyPopulation);
        }

        if population.len() >= self.parallel_threshold {
            population
                .par_iter_mut()
                .try_for_each(|individual| self.score(individual))?;
        } else {
            for individual in population.iter_mut() {
                self.score(individual)?;
            }
        }

        let mut best = 0;
        let mut worst = 0;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut worst_fitness = f64::INFINITY;
        for (index, individual) in population.iter().enumerate() {
            let fitness = individual.fitness().unwrap_or(f64::NAN);
            if fitness > best_fitness {
                best = index;
                best_fitness = fitness;
            }
            if fitness < worst_fitness {
                worst = index;
                worst_fitness = fitness;
            }
        }

        Ok(Review {
            best: population[best].clone(),
            worst: population[worst].clone(),
        })
    }
}
