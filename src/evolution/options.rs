//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the tunable constants of a run: the
//! minimum area a boat must cover, the density it should get below, the
//! population size, how many accepted generations are required, a generation
//! cap and the rayon threshold for parallel scoring.
//!
//! ## Example
//!
//! ```rust
//! use boatga::evolution::options::EvolutionOptions;
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(5000.0, 0.8, 20, 50);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 40);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{BoatError, Result};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionOptions {
    min_area: f64,
    max_density: f64,
    population_size: usize,
    required_improvements: usize,
    /// `None` runs until the termination condition holds, however long that takes.
    max_generations: Option<usize>,
    /// Minimum population size scored in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(
        min_area: f64,
        max_density: f64,
        population_size: usize,
        required_improvements: usize,
    ) -> Self {
        Self {
            min_area,
            max_density,
            population_size,
            required_improvements,
            ..Self::default()
        }
    }

    pub fn get_min_area(&self) -> f64 {
        self.min_area
    }

    pub fn get_max_density(&self) -> f64 {
        self.max_density
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_required_improvements(&self) -> usize {
        self.required_improvements
    }

    pub fn get_max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_min_area(&mut self, min_area: f64) {
        self.min_area = min_area;
    }

    pub fn set_max_density(&mut self, max_density: f64) {
        self.max_density = max_density;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_required_improvements(&mut self, required_improvements: usize) {
        self.required_improvements = required_improvements;
    }

    pub fn set_max_generations(&mut self, max_generations: Option<usize>) {
        self.max_generations = max_generations;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks that a run can be started with these options.
    ///
    /// # Errors
    ///
    /// Returns `BoatError::Configuration` if the population size is zero or
    /// odd, or if the area or density thresholds are not positive and finite.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(BoatError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(BoatError::Configuration(format!(
                "Population size must be even so every parent has a partner, got {}",
                self.population_size
            )));
        }
        if !(self.min_area.is_finite() && self.min_area > 0.0) {
            return Err(BoatError::Configuration(format!(
                "Minimum area must be positive and finite, got {}",
                self.min_area
            )));
        }
        if !(self.max_density.is_finite() && self.max_density > 0.0) {
            return Err(BoatError::Configuration(format!(
                "Maximum density must be positive and finite, got {}",
                self.max_density
            )));
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boatga::evolution::options::EvolutionOptions;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .min_area(5000.0)
    ///     .max_density(0.9)
    ///     .population_size(10)
    ///     .required_improvements(5)
    ///     .max_generations(Some(500))
    ///     .build();
    /// assert_eq!(options.get_max_generations(), Some(500));
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            min_area: 100000.0,
            max_density: 1.0,
            population_size: 40,
            required_improvements: 100,
            max_generations: Some(10_000),
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `EvolutionOptions`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    min_area: Option<f64>,
    max_density: Option<f64>,
    population_size: Option<usize>,
    required_improvements: Option<usize>,
    max_generations: Option<Option<usize>>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn min_area(mut self, value: f64) -> Self {
        self.min_area = Some(value);
        self
    }

    pub fn max_density(mut self, value: f64) -> Self {
        self.max_density = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn required_improvements(mut self, value: usize) -> Self {
        self.required_improvements = Some(value);
        self
    }

    /// Sets the generation cap; `None` removes it.
    pub fn max_generations(mut self, value: Option<usize>) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance, filling unset values with the defaults.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            min_area: self.min_area.unwrap_or(defaults.min_area),
            max_density: self.max_density.unwrap_or(defaults.max_density),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            required_improvements: self
                .required_improvements
                .unwrap_or(defaults.required_improvements),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}
