//! # ItemPool
//!
//! The finite stock items are drawn from. Every draw removes the item, so the
//! pool drains over a run and an item can never be handed out twice.

use std::collections::HashSet;

use crate::error::{BoatError, Result};
use crate::item::Item;
use crate::rng::RandomNumberGenerator;

/// A consume-only collection of items with unique ids.
#[derive(Debug, Clone, Default)]
pub struct ItemPool {
    items: Vec<Item>,
}

impl ItemPool {
    /// Creates a pool from the given items.
    ///
    /// # Errors
    ///
    /// Returns `BoatError::DuplicateItem` if two items share an id.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(BoatError::DuplicateItem {
                    individual: "item pool".to_string(),
                    item: item.id,
                });
            }
        }
        Ok(Self { items })
    }

    /// Removes and returns one item chosen uniformly among the remaining ones.
    ///
    /// # Errors
    ///
    /// Returns `BoatError::EmptyPool` if nothing is left.
    pub fn draw_random(&mut self, rng: &mut RandomNumberGenerator) -> Result<Item> {
        if self.items.is_empty() {
            return Err(BoatError::EmptyPool);
        }
        let index = rng.gen_index(self.items.len());
        Ok(self.items.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Category;

    fn items(n: u64) -> Vec<Item> {
        (0..n)
            .map(|id| Item::new(id, Category::Wood, 10.0, 1.0, 1.0))
            .collect()
    }

    #[test]
    fn test_draw_removes_item() {
        let mut pool = ItemPool::new(items(5)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let mut drawn = HashSet::new();
        for expected_len in (0..5).rev() {
            let item = pool.draw_random(&mut rng).unwrap();
            assert_eq!(pool.len(), expected_len);
            assert!(!pool.contains(item.id));
            assert!(drawn.insert(item.id));
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn test_draw_from_empty_pool() {
        let mut pool = ItemPool::new(Vec::new()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        assert!(matches!(
            pool.draw_random(&mut rng),
            Err(BoatError::EmptyPool)
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut stock = items(3);
        stock.push(Item::new(1, Category::Rope, 0.5, 1.0, 0.2));

        match ItemPool::new(stock) {
            Err(BoatError::DuplicateItem { item, .. }) => assert_eq!(item, 1),
            other => panic!("Expected DuplicateItem error, got {:?}", other),
        }
    }

    #[test]
    fn test_draws_cover_the_remaining_items() {
        // Each of three items should eventually be drawn first.
        let mut firsts = HashSet::new();
        let mut rng = RandomNumberGenerator::from_seed(9);
        for _ in 0..100 {
            let mut pool = ItemPool::new(items(3)).unwrap();
            firsts.insert(pool.draw_random(&mut rng).unwrap().id);
        }
        assert_eq!(firsts.len(), 3);
    }
}
