//! # SinglePointCrossover
//!
//! Recombines two boats by cutting their item lists. Each child gets its own,
//! independently drawn cut point: the first child takes the head of parent A
//! and the tail of parent B, the second child the head of B and the tail of A.
use super::BreedStrategy;
use crate::{
    error::{BoatError, Result},
    individual::{IdGenerator, Individual},
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    pub fn new() -> Self {
        Self
    }

    /// Crosses two parents at cut points drawn uniformly from `[0, L]`, where
    /// `L` is the length of the shorter parent.
    pub fn cross(
        &self,
        parent_a: &Individual,
        parent_b: &Individual,
        ids: &mut IdGenerator,
        rng: &mut RandomNumberGenerator,
    ) -> (Individual, Individual) {
        let limit = parent_a.len().min(parent_b.len());
        let first_cut = rng.gen_inclusive(limit);
        let second_cut = rng.gen_inclusive(limit);
        self.splice(parent_a, parent_b, first_cut, second_cut, ids)
    }

    /// Crosses two parents at the given cut points.
    ///
    /// # Errors
    ///
    /// Returns `BoatError::Breeding` if a cut point lies beyond the shorter parent.
    pub fn cross_at(
        &self,
        parent_a: &Individual,
        parent_b: &Individual,
        first_cut: usize,
        second_cut: usize,
        ids: &mut IdGenerator,
    ) -> Result<(Individual, Individual)> {
        let limit = parent_a.len().min(parent_b.len());
        if first_cut > limit || second_cut > limit {
            return Err(BoatError::Breeding(format!(
                "Cut points ({}, {}) exceed the shorter parent length {}",
                first_cut, second_cut, limit
            )));
        }
        Ok(self.splice(parent_a, parent_b, first_cut, second_cut, ids))
    }

    fn splice(
        &self,
        parent_a: &Individual,
        parent_b: &Individual,
        first_cut: usize,
        second_cut: usize,
        ids: &mut IdGenerator,
    ) -> (Individual, Individual) {
        let generation = parent_a.generation().max(parent_b.generation()) + 1;

        let child = |head: &Individual, tail: &Individual, cut: usize, id: u64| {
            let mut items = Vec::with_capacity(cut + tail.len().saturating_sub(cut));
            items.extend_from_slice(&head.items()[..cut]);
            items.extend_from_slice(&tail.items()[cut..]);
            Individual::new(id, items, generation)
        };

        let child_a = child(parent_a, parent_b, first_cut, ids.next_id());
        let child_b = child(parent_b, parent_a, second_cut, ids.next_id());
        (child_a, child_b)
    }

    /// Crosses consecutive pairs of the mating list and flattens the children.
    ///
    /// # Errors
    ///
    /// Returns `BoatError::Breeding` for an odd-length list; a trailing parent
    /// without a partner is never dropped silently.
    #[tracing::instrument(level = "trace", skip_all, fields(parents = parents.len()))]
    pub fn cross_population(
        &self,
        parents: &[&Individual],
        ids: &mut IdGenerator,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if parents.len() % 2 != 0 {
            return Err(BoatError::Breeding(format!(
                "Mating list must have an even length, got {}",
                parents.len()
            )));
        }

        let mut children = Vec::with_capacity(parents.len());
        for pair in parents.chunks_exact(2) {
            let (child_a, child_b) = self.cross(pair[0], pair[1], ids, rng);
            children.push(child_a);
            children.push(child_b);
        }
        Ok(children)
    }
}

impl BreedStrategy for SinglePointCrossover {
    fn breed(
        &self,
        parents: &[&Individual],
        ids: &mut IdGenerator,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        self.cross_population(parents, ids, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Category, Item};

    fn parent(id: u64, item_ids: &[u64], generation: usize) -> Individual {
        let items = item_ids
            .iter()
            .map(|&item| Item::new(item, Category::Wood, 10.0, 1.0, 0.5))
            .collect();
        Individual::new(id, items, generation)
    }

    fn item_ids(individual: &Individual) -> Vec<u64> {
        individual.items().iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_cut_at_two() {
        let a = parent(1, &[1, 2, 3, 4], 0);
        let b = parent(2, &[5, 6, 7, 8], 0);
        let mut ids = IdGenerator::new();

        let (child_a, child_b) = SinglePointCrossover::new()
            .cross_at(&a, &b, 2, 2, &mut ids)
            .unwrap();

        assert_eq!(item_ids(&child_a), vec![1, 2, 7, 8]);
        assert_eq!(item_ids(&child_b), vec![5, 6, 3, 4]);
        assert_eq!(child_a.generation(), 1);
        assert_eq!(child_b.generation(), 1);
        assert_eq!(child_a.id(), 1);
        assert_eq!(child_b.id(), 2);
    }

    #[test]
    fn test_matching_cuts_preserve_item_count() {
        let a = parent(1, &[1, 2, 3], 0);
        let b = parent(2, &[4, 5, 6, 7, 8], 0);
        let mut ids = IdGenerator::new();
        let crossover = SinglePointCrossover::new();

        for cut in 0..=3 {
            let (child_a, child_b) = crossover.cross_at(&a, &b, cut, cut, &mut ids).unwrap();
            assert_eq!(child_a.len() + child_b.len(), a.len() + b.len());
        }
    }

    #[test]
    fn test_unequal_lengths_keep_long_tail() {
        let a = parent(1, &[1, 2], 0);
        let b = parent(2, &[3, 4, 5, 6], 0);
        let mut ids = IdGenerator::new();

        let (child_a, child_b) = SinglePointCrossover::new()
            .cross_at(&a, &b, 1, 2, &mut ids)
            .unwrap();

        assert_eq!(item_ids(&child_a), vec![1, 4, 5, 6]);
        assert_eq!(item_ids(&child_b), vec![3, 4]);
    }

    #[test]
    fn test_generation_follows_oldest_parent() {
        let a = parent(1, &[1, 2], 3);
        let b = parent(2, &[3, 4], 5);
        let mut ids = IdGenerator::new();

        let (child_a, child_b) = SinglePointCrossover::new()
            .cross_at(&a, &b, 1, 1, &mut ids)
            .unwrap();
        assert_eq!(child_a.generation(), 6);
        assert_eq!(child_b.generation(), 6);
    }

    #[test]
    fn test_cut_out_of_range() {
        let a = parent(1, &[1, 2], 0);
        let b = parent(2, &[3, 4, 5], 0);
        let mut ids = IdGenerator::new();

        assert!(matches!(
            SinglePointCrossover::new().cross_at(&a, &b, 3, 0, &mut ids),
            Err(BoatError::Breeding(_))
        ));
    }

    #[test]
    fn test_random_cross_takes_items_from_parents_only() {
        let a = parent(1, &[1, 2, 3, 4, 5], 0);
        let b = parent(2, &[6, 7, 8, 9, 10], 0);
        let mut ids = IdGenerator::new();
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..100 {
            let (child_a, child_b) = SinglePointCrossover::new().cross(&a, &b, &mut ids, &mut rng);
            for child in [&child_a, &child_b] {
                assert_eq!(child.len(), 5);
                assert!(crate::validation::validate(child));
                assert!(child.items().iter().all(|item| item.id <= 10));
            }
        }
    }

    #[test]
    fn test_cross_population() {
        let population = vec![
            parent(1, &[1, 2], 0),
            parent(2, &[3, 4], 0),
            parent(3, &[5, 6], 0),
            parent(4, &[7, 8], 0),
        ];
        let parents: Vec<&Individual> = population.iter().collect();
        let mut ids = IdGenerator::new();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let children = SinglePointCrossover::new()
            .breed(&parents, &mut ids, &mut rng)
            .unwrap();

        assert_eq!(children.len(), 4);
        // The first pair only mixes items of parents 1 and 2.
        for child in &children[..2] {
            assert!(child.items().iter().all(|item| item.id <= 4));
        }
        for child in &children[2..] {
            assert!(child.items().iter().all(|item| item.id >= 5));
        }
    }

    #[test]
    fn test_odd_mating_list_rejected() {
        let population = vec![parent(1, &[1], 0), parent(2, &[2], 0), parent(3, &[3], 0)];
        let parents: Vec<&Individual> = population.iter().collect();
        let mut ids = IdGenerator::new();
        let mut rng = RandomNumberGenerator::from_seed(1);

        assert!(matches!(
            SinglePointCrossover::new().cross_population(&parents, &mut ids, &mut rng),
            Err(BoatError::Breeding(_))
        ));
    }
}
