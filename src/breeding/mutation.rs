//! # StashMutation
//!
//! Swaps one item of a boat for a fresh item from the stash. The displaced
//! item is discarded, never returned to the pool.
use crate::{individual::Individual, pool::ItemPool, rng::RandomNumberGenerator};

#[derive(Debug, Clone, Default)]
pub struct StashMutation;

impl StashMutation {
    pub fn new() -> Self {
        Self
    }

    /// Replaces a uniformly chosen item of `individual` with one drawn from `pool`.
    ///
    /// Does nothing when the pool is exhausted or the individual has no items.
    /// Returns whether the individual changed.
    pub fn mutate(
        &self,
        individual: &mut Individual,
        pool: &mut ItemPool,
        rng: &mut RandomNumberGenerator,
    ) -> bool {
        if individual.is_empty() {
            return false;
        }

        let item = match pool.draw_random(rng) {
            Ok(item) => item,
            Err(_) => {
                tracing::warn!(individual = individual.id(), "Stash exhausted, skipping mutation");
                return false;
            }
        };

        let position = rng.gen_index(individual.len());
        let replaced = individual.replace(position, item);
        tracing::trace!(
            individual = individual.id(),
            position,
            replaced = replaced.id,
            "Mutated individual"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Category, Item};

    fn boat(item_ids: &[u64]) -> Individual {
        let items = item_ids
            .iter()
            .map(|&id| Item::new(id, Category::Wood, 10.0, 1.0, 0.5))
            .collect();
        Individual::new(1, items, 0)
    }

    #[test]
    fn test_mutation_moves_one_item_out_of_pool() {
        let mut individual = boat(&[1, 2, 3]);
        let mut pool = ItemPool::new(vec![
            Item::new(10, Category::Leaf, 5.0, 1.0, 0.3),
            Item::new(11, Category::Leaf, 5.0, 1.0, 0.3),
        ])
        .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        assert!(StashMutation::new().mutate(&mut individual, &mut pool, &mut rng));

        assert_eq!(individual.len(), 3);
        assert_eq!(pool.len(), 1);
        let new_items: Vec<u64> = individual
            .items()
            .iter()
            .map(|item| item.id)
            .filter(|&id| id >= 10)
            .collect();
        assert_eq!(new_items.len(), 1);
        assert!(!pool.contains(new_items[0]));
        let kept = individual.items().iter().filter(|item| item.id < 10).count();
        assert_eq!(kept, 2);
    }

    #[test]
    fn test_empty_pool_is_a_no_op() {
        let mut individual = boat(&[1, 2, 3]);
        let before = individual.clone();
        let mut pool = ItemPool::default();
        let mut rng = RandomNumberGenerator::from_seed(42);

        assert!(!StashMutation::new().mutate(&mut individual, &mut pool, &mut rng));
        assert_eq!(individual, before);
    }

    #[test]
    fn test_empty_individual_keeps_pool_intact() {
        let mut individual = boat(&[]);
        let mut pool = ItemPool::new(vec![Item::new(10, Category::Leaf, 5.0, 1.0, 0.3)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        assert!(!StashMutation::new().mutate(&mut individual, &mut pool, &mut rng));
        assert_eq!(pool.len(), 1);
    }
}
