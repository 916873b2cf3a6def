//! # Error Types
//!
//! This module defines the error type shared by every stage of the boat
//! optimizer: drawing from the stash, scoring, selection, breeding and the
//! evolution loop itself.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use boatga::error::{BoatError, Result};
//!
//! fn some_function() -> Result<()> {
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use boatga::error::{BoatError, OptionExt};
//!
//! fn first_item(ids: &[u64]) -> boatga::error::Result<u64> {
//!     ids.first().copied().ok_or_else_boat(|| BoatError::EmptyPool)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while optimizing a boat.
#[derive(Error, Debug)]
pub enum BoatError {
    /// A draw was requested from an exhausted item pool.
    #[error("Empty pool error: no items left in the stash")]
    EmptyPool,

    /// The total volume of an individual is zero, so its density is undefined.
    #[error("Zero volume error: individual {individual} has a total volume of zero")]
    ZeroVolume { individual: u64 },

    /// Selection was attempted over fitness values it cannot sample from.
    #[error("Invalid fitness error: {0}")]
    InvalidFitness(String),

    /// The configured challenge produced an unusable score.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// The same item id was found twice where ids must be unique.
    #[error("Duplicate item error: item {item} appears more than once in {individual}")]
    DuplicateItem { individual: String, item: u64 },

    /// A breeding operation was misused.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// The evolution loop reached an inconsistent state.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// An invalid configuration was provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An operation needed at least one individual.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stash or configuration could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for BoatError {
    fn from(error: serde_json::Error) -> Self {
        BoatError::Serialization(error.to_string())
    }
}

/// A specialized Result type for boat optimization.
pub type Result<T> = std::result::Result<T, BoatError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use boatga::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> boatga::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `BoatError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| BoatError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, BoatError>` using `err_fn` for `None`.
    fn ok_or_else_boat<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> BoatError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_boat<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> BoatError,
    {
        self.ok_or_else(err_fn)
    }
}
