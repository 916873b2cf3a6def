//! # Items
//!
//! An `Item` is one physical piece of stock: a plank, a leaf, a length of rope
//! or a metal sheet. Items are plain values; once drawn from the pool an item
//! travels with the individual that owns it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of material an item is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Wood,
    Leaf,
    Rope,
    Metal,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Wood,
        Category::Leaf,
        Category::Rope,
        Category::Metal,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Wood => "wood",
            Category::Leaf => "leaf",
            Category::Rope => "rope",
            Category::Metal => "metal",
        };
        f.write_str(name)
    }
}

/// A single piece of stock with its physical attributes.
///
/// `id` is unique across the stash of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    pub id: u64,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub category: Category,
    pub area: f64,
    pub volume: f64,
    pub mass: f64,
}

impl Item {
    pub fn new(id: u64, category: Category, area: f64, volume: f64, mass: f64) -> Self {
        Self {
            id,
            category,
            area,
            volume,
            mass,
        }
    }

    /// Mass per unit volume, or `None` for an item without volume.
    pub fn density(&self) -> Option<f64> {
        if self.volume > 0.0 {
            Some(self.mass / self.volume)
        } else {
            None
        }
    }
}
