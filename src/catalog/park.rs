use super::MenuItem;
use serde::{Deserialize, Serialize};

/// Display name used when no park is selected
pub const PLACEHOLDER_PARK_NAME: &str = "Select a Park";

/// A themed venue with its lands and menu
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Park {
    /// Unique key (e.g., "hollywood-studios")
    pub id: String,
    pub name: String,
    pub subtitle: String,
    /// Land names in display order
    pub lands: Vec<String>,
    pub menu_items: Vec<MenuItem>,
}

impl Park {
    /// The stand-in park shown before a selection exists
    ///
    /// Empty id, lands and menu so every derived view is simply empty.
    pub fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER_PARK_NAME.to_string(),
            ..Self::default()
        }
    }

    pub fn has_land(&self, land: &str) -> bool {
        self.lands.iter().any(|l| l == land)
    }

    /// First menu item with exactly this name
    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|i| i.name == name)
    }
}
