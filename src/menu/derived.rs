use crate::catalog::{MenuItem, Park};
use std::ops::Deref;

/// Calorie ceiling (exclusive) for the GLP-1 heuristic
pub const GLP1_MAX_CALORIES: f64 = 400.0;

/// Fat ceiling in grams (exclusive) for the GLP-1 heuristic
pub const GLP1_MAX_FAT: f64 = 20.0;

/// GLP-1 friendly: a non-fried food under 400 calories and 20g fat
pub fn is_glp1_friendly(item: &MenuItem) -> bool {
    item.calories < GLP1_MAX_CALORIES
        && item.fat < GLP1_MAX_FAT
        && !item.is_fried
        && item.is_food()
}

/// A catalog item viewed together with its computed GLP-1 flag
///
/// Borrows the catalog entry; the flag is computed on every view and
/// never written back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMenuItem<'a> {
    pub item: &'a MenuItem,
    pub glp1_friendly: bool,
}

impl<'a> DerivedMenuItem<'a> {
    pub fn new(item: &'a MenuItem) -> Self {
        Self {
            item,
            glp1_friendly: is_glp1_friendly(item),
        }
    }
}

impl Deref for DerivedMenuItem<'_> {
    type Target = MenuItem;

    fn deref(&self) -> &MenuItem {
        self.item
    }
}

/// Derive every item of the park's menu, in catalog order
pub fn current_menu(park: &Park) -> Vec<DerivedMenuItem<'_>> {
    park.menu_items.iter().map(DerivedMenuItem::new).collect()
}
