//! Catalog domain models
//!
//! This module contains the read-only catalog loaded at startup.
//! It is split into submodules:
//! - `menu_item`: a single food or drink entry with nutrition data
//! - `park`: a park with its lands and menu, plus the placeholder park

mod menu_item;
mod park;

use serde::{Deserialize, Serialize};

pub use menu_item::{ItemType, MenuItem};
pub use park::{PLACEHOLDER_PARK_NAME, Park};

/// The whole catalog document
///
/// Loaded once per session and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Parks in document order
    pub parks: Vec<Park>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.parks.is_empty()
    }

    /// Find a park by its identifier
    ///
    /// # Arguments
    /// * `id` - The park ID to search for (e.g., "hollywood-studios")
    ///
    /// # Returns
    /// An optional reference to the park if found
    pub fn find_park(&self, id: &str) -> Option<&Park> {
        self.parks.iter().find(|p| p.id == id)
    }

    /// Identifier of the first park, used as the default selection
    pub fn first_park_id(&self) -> Option<&str> {
        self.parks.first().map(|p| p.id.as_str())
    }

    /// All park identifiers in document order
    pub fn park_ids(&self) -> Vec<&str> {
        self.parks.iter().map(|p| p.id.as_str()).collect()
    }

    /// Total number of menu items across all parks
    pub fn item_count(&self) -> usize {
        self.parks.iter().map(|p| p.menu_items.len()).sum()
    }
}
