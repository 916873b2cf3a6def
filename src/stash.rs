//! # Stash
//!
//! Synthesizes the stock the optimizer works from. Each category has a
//! `CategoryProfile` with uniform sampling ranges; mass is derived from a
//! sampled density and volume so that density stays within the profile.
//!
//! With the `serde` feature a stash can be written to and read from a JSON
//! file, so several runs can share the same stock.
//!
//! ## Example
//!
//! ```rust
//! use boatga::item::Category;
//! use boatga::rng::RandomNumberGenerator;
//! use boatga::stash::{generate_stash, StashConfig};
//!
//! let config = StashConfig::new(vec![(Category::Wood, 10), (Category::Leaf, 5)]);
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let stash = generate_stash(&config, &mut rng);
//! assert_eq!(stash.len(), 15);
//! ```

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::item::{Category, Item};
use crate::rng::RandomNumberGenerator;

/// Uniform sampling ranges for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProfile {
    pub area: Range<f64>,
    pub density: Range<f64>,
    pub volume: Range<f64>,
}

impl CategoryProfile {
    pub fn for_category(category: Category) -> Self {
        let (area, density) = match category {
            Category::Wood => (20.0..200.0, 0.5..1.5),
            Category::Leaf => (1.0..10.0, 0.0..1.0),
            Category::Rope => (0.0..1.0, 0.0..1.0),
            Category::Metal => (5.0..50.0, 2.5..8.0),
        };
        Self {
            area,
            density,
            volume: 1.0..10.0,
        }
    }
}

/// How many items of each category to generate, in generation order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StashConfig {
    pub counts: Vec<(Category, usize)>,
}

impl StashConfig {
    pub fn new(counts: Vec<(Category, usize)>) -> Self {
        Self { counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            counts: vec![
                (Category::Wood, 1000),
                (Category::Rope, 10000),
                (Category::Leaf, 100000),
            ],
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sample(rng: &mut RandomNumberGenerator, range: &Range<f64>) -> f64 {
    rng.gen_f64(range.start, range.end)
}

/// Creates one item of the given category.
pub fn create_item(id: u64, category: Category, rng: &mut RandomNumberGenerator) -> Item {
    let profile = CategoryProfile::for_category(category);
    let area = round2(sample(rng, &profile.area));
    let density = sample(rng, &profile.density);
    let volume = round2(sample(rng, &profile.volume));
    let mass = round2(density * volume);
    Item::new(id, category, area, volume, mass)
}

/// Generates a stash with ids assigned sequentially from zero.
pub fn generate_stash(config: &StashConfig, rng: &mut RandomNumberGenerator) -> Vec<Item> {
    let mut items = Vec::with_capacity(config.total());
    for &(category, count) in &config.counts {
        let start = items.len() as u64;
        items.extend((start..start + count as u64).map(|id| create_item(id, category, rng)));
    }
    tracing::debug!(items = items.len(), "Generated stash");
    items
}

/// Writes the stash as a pretty-printed JSON array.
#[cfg(feature = "serde")]
pub fn save_stash<P: AsRef<std::path::Path>>(path: P, items: &[Item]) -> crate::error::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), items)?;
    Ok(())
}

/// Reads a stash previously written by [`save_stash`].
#[cfg(feature = "serde")]
pub fn load_stash<P: AsRef<std::path::Path>>(path: P) -> crate::error::Result<Vec<Item>> {
    let file = std::fs::File::open(path)?;
    let items: Vec<Item> = serde_json::from_reader(std::io::BufReader::new(file))?;
    tracing::debug!(items = items.len(), "Loaded stash");
    Ok(items)
}
