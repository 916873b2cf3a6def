//! # PopulationInitializer
//!
//! Builds the founding population by drawing items from the shared pool until
//! each boat reaches the minimum area. Individuals are built one after the
//! other, so later ones choose from a smaller pool.

use crate::error::{BoatError, Result};
use crate::individual::{IdGenerator, Individual};
use crate::pool::ItemPool;
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone)]
pub struct PopulationInitializer {
    min_area: f64,
}

impl PopulationInitializer {
    pub fn new(min_area: f64) -> Self {
        Self { min_area }
    }

    pub fn min_area(&self) -> f64 {
        self.min_area
    }

    /// Draws items into a new generation-0 individual until its area reaches the minimum.
    ///
    /// Items drawn before a failure are not returned to the pool.
    ///
    /// # Errors
    ///
    /// Returns `BoatError::EmptyPool` if the pool runs dry first.
    pub fn create_individual(
        &self,
        pool: &mut ItemPool,
        ids: &mut IdGenerator,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        let mut individual = Individual::new(ids.next_id(), Vec::new(), 0);
        let mut area = 0.0;

        while area < self.min_area {
            let item = pool.draw_random(rng).map_err(|err| {
                tracing::warn!(
                    individual = individual.id(),
                    items = individual.len(),
                    area,
                    min_area = self.min_area,
                    "Stash exhausted before reaching the minimum area"
                );
                err
            })?;
            area += item.area;
            individual.push(item);
        }

        Ok(individual)
    }

    /// Creates `size` individuals in sequence from the same pool.
    pub fn create_population(
        &self,
        size: usize,
        pool: &mut ItemPool,
        ids: &mut IdGenerator,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if size == 0 {
            return Err(BoatError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        let population = (0..size)
            .map(|_| self.create_individual(pool, ids, rng))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            size,
            remaining = pool.len(),
            "Created initial population"
        );
        Ok(population)
    }
}
