//! # Individual
//!
//! A candidate boat: the ordered items it is built from plus the metrics the
//! fitness evaluator derives from them. Any change to the items clears the
//! metrics, so a stale score can never be read after a mutation.

use crate::item::Item;

/// Metrics derived from an individual's items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub area: f64,
    pub total_mass: f64,
    pub total_volume: f64,
    pub density: f64,
    pub fitness: f64,
}

/// Hands out unique, monotonically increasing individual ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id. The first id is 1.
    pub fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// The most recently issued id, 0 if none has been issued.
    pub fn last(&self) -> u64 {
        self.last
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    id: u64,
    items: Vec<Item>,
    generation: usize,
    metrics: Option<Metrics>,
}

impl Individual {
    pub fn new(id: u64, items: Vec<Item>, generation: usize) -> Self {
        Self {
            id,
            items,
            generation,
            metrics: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    /// Fitness from the last evaluation, if the individual has been scored since it last changed.
    pub fn fitness(&self) -> Option<f64> {
        self.metrics.map(|m| m.fitness)
    }

    pub fn density(&self) -> Option<f64> {
        self.metrics.map(|m| m.density)
    }

    /// Sum of item areas, computed from the items directly.
    pub fn total_area(&self) -> f64 {
        self.items.iter().map(|item| item.area).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: Item) {
        self.metrics = None;
        self.items.push(item);
    }

    /// Puts `item` at `position`, returning the item it displaced.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn replace(&mut self, position: usize, item: Item) -> Item {
        self.metrics = None;
        std::mem::replace(&mut self.items[position], item)
    }

    pub(crate) fn set_metrics(&mut self, metrics: Metrics) {
        self.metrics = Some(metrics);
    }

    /// A copy of this individual under a new id; metrics are kept.
    pub fn with_id(&self, id: u64) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Category;

    #[test]
    fn test_id_generator_is_monotonic() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.last(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.last(), 2);
    }

    #[test]
    fn test_changes_clear_metrics() {
        let mut individual = Individual::new(
            1,
            vec![Item::new(1, Category::Wood, 10.0, 1.0, 1.0)],
            0,
        );
        let metrics = Metrics {
            area: 10.0,
            total_mass: 1.0,
            total_volume: 1.0,
            density: 1.0,
            fitness: 10.0,
        };

        individual.set_metrics(metrics);
        assert_eq!(individual.fitness(), Some(10.0));

        let old = individual.replace(0, Item::new(2, Category::Leaf, 5.0, 1.0, 0.5));
        assert_eq!(old.id, 1);
        assert_eq!(individual.fitness(), None);

        individual.set_metrics(metrics);
        individual.push(Item::new(3, Category::Rope, 0.5, 1.0, 0.5));
        assert!(individual.metrics().is_none());
        assert_eq!(individual.total_area(), 5.5);
    }
}
