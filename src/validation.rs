//! Duplicate-item detection.
//!
//! An item can only be part of one boat once. A repeated id inside a single
//! individual means crossover or mutation copied an item instead of moving it.

use std::collections::HashSet;

use crate::error::{BoatError, Result};
use crate::individual::Individual;

/// Ids that occur more than once in `individual`, in order of first repetition.
pub fn duplicate_ids(individual: &Individual) -> Vec<u64> {
    let mut seen = HashSet::with_capacity(individual.len());
    let mut duplicates = Vec::new();
    for item in individual.items() {
        if !seen.insert(item.id) && !duplicates.contains(&item.id) {
            duplicates.push(item.id);
        }
    }
    duplicates
}

/// Fails with `BoatError::DuplicateItem` on the first repeated item id.
pub fn ensure_unique_items(individual: &Individual) -> Result<()> {
    match duplicate_ids(individual).first() {
        Some(&item) => Err(BoatError::DuplicateItem {
            individual: format!("individual {}", individual.id()),
            item,
        }),
        None => Ok(()),
    }
}

/// Returns `false` and logs a warning if `individual` holds a duplicated item.
pub fn validate(individual: &Individual) -> bool {
    match ensure_unique_items(individual) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(
                individual = individual.id(),
                duplicates = ?duplicate_ids(individual),
                "{}",
                err
            );
            false
        }
    }
}
