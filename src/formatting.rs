//! Formatting helper functions for the menu browser server
//!
//! Plain-text rendering of parks, filters, menu listings and the tracker.

use crate::browser::BrowserState;
use crate::catalog::Park;
use crate::loader::LoadState;
use crate::menu::{DerivedMenuItem, FilterState};
use crate::tracker::Tracker;

pub const LOADING_NOTICE: &str = "Loading park data...";

/// Render a nutrition amount without a trailing ".0"
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Format the park list with the current selection marked
pub fn format_parks(state: &BrowserState) -> String {
    match state.load_state() {
        LoadState::NotLoaded | LoadState::Loading => return LOADING_NOTICE.to_string(),
        LoadState::Failed(reason) => {
            return format!("Park data could not be loaded: {}", reason);
        }
        LoadState::Loaded => {}
    }

    let parks = &state.catalog().parks;
    if parks.is_empty() {
        return "No parks available".to_string();
    }

    let selected = state.selected_park_id();
    let mut result = format!("Found {} park(s):\n\n", parks.len());
    for park in parks {
        result.push_str(&format!("- [{}] {}", park.id, park.name));
        if !park.subtitle.is_empty() {
            result.push_str(&format!(" ({})", park.subtitle));
        }
        if selected == Some(park.id.as_str()) {
            result.push_str(" <- selected");
        }
        result.push('\n');
        result.push_str(&format!(
            "  Lands: {}\n  Menu items: {}\n",
            if park.lands.is_empty() {
                "-".to_string()
            } else {
                park.lands.join(", ")
            },
            park.menu_items.len()
        ));
    }
    result
}

/// Format the current filter and sort settings
pub fn format_filters(filters: &FilterState) -> String {
    let mut result = String::from("Filters:\n");
    result.push_str(&format!(
        "  Search: {}\n",
        if filters.search_term.is_empty() {
            "(none)".to_string()
        } else {
            format!("\"{}\"", filters.search_term)
        }
    ));
    result.push_str(&format!(
        "  Max carbs: {}\n",
        filters
            .carb_ceiling()
            .map(|c| format!("{}g", format_amount(c)))
            .unwrap_or_else(|| "(none)".to_string())
    ));
    result.push_str(&format!("  Land: {}\n", filters.land));
    result.push_str(&format!("  Sort: {}\n", filters.sort_by));
    result.push_str(&format!("  GLP-1 friendly only: {}\n", yes_no(filters.glp1_only)));
    result.push_str(&format!("  Vegetarian only: {}\n", yes_no(filters.vegetarian_only)));
    result.push_str(&format!("  Hide drinks: {}\n", yes_no(filters.hide_drinks)));
    result
}

/// Format a menu listing for a park
///
/// # Arguments
/// * `park` - The park the items belong to (used for the heading)
/// * `items` - Items to list, already filtered and sorted
pub fn format_menu(park: &Park, items: &[DerivedMenuItem<'_>]) -> String {
    if items.is_empty() {
        return format!("{}: no menu items match the current filters", park.name);
    }

    let mut result = format!("{}: {} item(s)\n\n", park.name, items.len());
    for entry in items {
        let mut tags = vec![entry.item_type.to_string()];
        if entry.glp1_friendly {
            tags.push("GLP-1 friendly".to_string());
        }
        if entry.vegetarian {
            tags.push("vegetarian".to_string());
        }
        if entry.is_fried {
            tags.push("fried".to_string());
        }

        result.push_str(&format!("- {} [{}]\n", entry.name, tags.join(", ")));
        result.push_str(&format!("  {} ({})\n", entry.restaurant, entry.land));
        if !entry.description.is_empty() {
            result.push_str(&format!("  {}\n", entry.description));
        }
        result.push_str(&format!(
            "  Carbs: {}g, Fat: {}g, Calories: {}\n",
            format_amount(entry.carbs),
            format_amount(entry.fat),
            format_amount(entry.calories)
        ));
    }
    result
}

/// Format the tracker entries and totals
pub fn format_tracker(tracker: &Tracker) -> String {
    let totals = tracker.totals();
    let mut result = format!(
        "Tracker ({}, {} item(s))\n",
        if tracker.expanded { "expanded" } else { "collapsed" },
        tracker.len()
    );

    if tracker.expanded {
        for (index, item) in tracker.items().iter().enumerate() {
            result.push_str(&format!(
                "{}. {} - Carbs: {}g, Fat: {}g, Calories: {}\n",
                index + 1,
                item.name,
                format_amount(item.carbs),
                format_amount(item.fat),
                format_amount(item.calories)
            ));
        }
    }

    result.push_str(&format!(
        "Total: Carbs: {}g, Fat: {}g, Calories: {}\n",
        format_amount(totals.carbs),
        format_amount(totals.fat),
        format_amount(totals.calories)
    ));
    result
}
