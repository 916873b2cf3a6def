//! # Challenge
//!
//! A `Challenge` turns the aggregate area and density of a boat into a single
//! score, where a higher score is better. The evaluator computes the
//! aggregates; the challenge only decides how they trade off.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub trait Challenge {
    /// Scores a boat with the given total area and density.
    ///
    /// Implementations should not increase with density and should not
    /// decrease with area.
    fn score(&self, area: f64, density: f64) -> f64;
}

/// The scoring formulas the optimizer ships with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FitnessFormula {
    /// `area / density^exponent`.
    AreaOverDensityPow { exponent: i32 },
    /// `1 / density`, ignoring area.
    InverseDensity,
}

impl FitnessFormula {
    pub fn area_over_density_pow(exponent: i32) -> Self {
        FitnessFormula::AreaOverDensityPow { exponent }
    }
}

impl Default for FitnessFormula {
    fn default() -> Self {
        FitnessFormula::AreaOverDensityPow { exponent: 2 }
    }
}

impl Challenge for FitnessFormula {
    fn score(&self, area: f64, density: f64) -> f64 {
        match *self {
            FitnessFormula::AreaOverDensityPow { exponent } => area / density.powi(exponent),
            FitnessFormula::InverseDensity => 1.0 / density,
        }
    }
}

impl<F> Challenge for F
where
    F: Fn(f64, f64) -> f64,
{
    fn score(&self, area: f64, density: f64) -> f64 {
        self(area, density)
    }
}
