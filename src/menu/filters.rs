//! Individual filter stages and the menu sort
//!
//! Each stage narrows the list in place and keeps the relative order of
//! the survivors.

use super::derived::DerivedMenuItem;
use super::filter_state::{LandFilter, SortBy};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Apply keyword search (case-insensitive, in name, description and restaurant)
///
/// An empty term keeps everything.
pub fn apply_search_filter(items: &mut Vec<DerivedMenuItem<'_>>, term: &str) {
    if term.is_empty() {
        return;
    }
    let term_lower = term.to_lowercase();
    items.retain(|entry| {
        entry.name.to_lowercase().contains(&term_lower)
            || entry.description.to_lowercase().contains(&term_lower)
            || entry.restaurant.to_lowercase().contains(&term_lower)
    });
}

/// Keep items with at most `max_carbs` grams of carbohydrates
///
/// Only a positive ceiling filters anything.
pub fn apply_carb_ceiling(items: &mut Vec<DerivedMenuItem<'_>>, max_carbs: Option<f64>) {
    if let Some(ceiling) = max_carbs
        && ceiling > 0.0
    {
        items.retain(|entry| entry.carbs <= ceiling);
    }
}

/// Keep items from the selected land (exact match)
pub fn apply_land_filter(items: &mut Vec<DerivedMenuItem<'_>>, land: &LandFilter) {
    if let LandFilter::Only(name) = land {
        items.retain(|entry| &entry.land == name);
    }
}

pub fn apply_glp1_filter(items: &mut Vec<DerivedMenuItem<'_>>, enabled: bool) {
    if enabled {
        items.retain(|entry| entry.glp1_friendly);
    }
}

pub fn apply_vegetarian_filter(items: &mut Vec<DerivedMenuItem<'_>>, enabled: bool) {
    if enabled {
        items.retain(|entry| entry.vegetarian);
    }
}

/// Drop drinks; items of any other type stay
pub fn apply_hide_drinks_filter(items: &mut Vec<DerivedMenuItem<'_>>, enabled: bool) {
    if enabled {
        items.retain(|entry| !entry.is_drink());
    }
}

/// Primary collation key: base letters only, case-folded
fn primary_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two names the way a reader expects an alphabetical list
///
/// Levels, in order:
/// 1. base letters, ignoring accents and case ("Éclair" sorts among the e's)
/// 2. accents: the unaccented form first, then by position of the first accent
/// 3. case: lowercase before uppercase
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| {
            let accents_a = a.nfd().flat_map(char::to_lowercase);
            let accents_b = b.nfd().flat_map(char::to_lowercase);
            accents_a.cmp(accents_b)
        })
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
                .unwrap_or(Ordering::Equal)
        })
}

/// Sort the list in place (stable: ties keep their current order)
pub fn sort_menu(items: &mut [DerivedMenuItem<'_>], sort_by: SortBy) {
    match sort_by {
        SortBy::Name => items.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortBy::CarbsAsc => items.sort_by(|a, b| a.carbs.total_cmp(&b.carbs)),
        SortBy::CarbsDesc => items.sort_by(|a, b| b.carbs.total_cmp(&a.carbs)),
    }
}
