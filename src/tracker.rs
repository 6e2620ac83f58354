//! Nutrition tracker
//!
//! An append-only list of item snapshots with running totals. Duplicates
//! are kept so repeated additions count as extra servings.

use crate::catalog::MenuItem;
use serde::Serialize;

/// Value copy of the nutrition fields of a menu item at the time it was added
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerItem {
    pub name: String,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

impl From<&MenuItem> for TrackerItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            carbs: item.carbs,
            fat: item.fat,
            calories: item.calories,
        }
    }
}

/// Sums over every tracked entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tracker {
    items: Vec<TrackerItem>,
    /// UI-only: whether the tracker panel is shown expanded
    pub expanded: bool,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `item` and expand the panel
    ///
    /// # Returns
    /// A copy of the appended snapshot
    pub fn add(&mut self, item: &MenuItem) -> TrackerItem {
        let snapshot = TrackerItem::from(item);
        self.items.push(snapshot.clone());
        self.expanded = true;
        snapshot
    }

    /// Flip the expanded flag and return the new value
    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Entries in insertion order
    pub fn items(&self) -> &[TrackerItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_carbs(&self) -> f64 {
        self.items.iter().map(|i| i.carbs).sum()
    }

    pub fn total_fat(&self) -> f64 {
        self.items.iter().map(|i| i.fat).sum()
    }

    pub fn total_calories(&self) -> f64 {
        self.items.iter().map(|i| i.calories).sum()
    }

    pub fn totals(&self) -> Totals {
        Totals {
            carbs: self.total_carbs(),
            fat: self.total_fat(),
            calories: self.total_calories(),
        }
    }
}
