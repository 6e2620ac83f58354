use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of menu entry
///
/// Anything other than "food" or "drink" (including a missing value)
/// deserializes to `Other`, which is neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Food,
    Drink,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemType::Food => "food",
            ItemType::Drink => "drink",
            ItemType::Other => "other",
        };
        f.write_str(name)
    }
}

/// A purchasable food or drink entry with nutrition metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    /// Restaurant or stand serving the item
    pub restaurant: String,
    /// Land the restaurant sits in; matches one of the park's lands
    pub land: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub calories: f64,
    /// Grams of fat
    pub fat: f64,
    /// Grams of carbohydrates
    pub carbs: f64,
    pub is_fried: bool,
    pub vegetarian: bool,
}

impl MenuItem {
    pub fn is_food(&self) -> bool {
        self.item_type == ItemType::Food
    }

    pub fn is_drink(&self) -> bool {
        self.item_type == ItemType::Drink
    }
}
