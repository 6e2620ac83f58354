//! Menu derivation and the filter/sort pipeline
//!
//! - `derived`: per-item GLP-1 flag and the `current_menu` view
//! - `filter_state`: user-controlled filter and sort settings
//! - `filters`: individual filter stages and the stable sort
//! - `pipeline`: `filtered_menu`, the composition of all stages

mod derived;
mod filter_state;
mod filters;
mod pipeline;

pub use derived::{DerivedMenuItem, current_menu, is_glp1_friendly};
pub use filter_state::{FilterState, LandFilter, SortBy};
pub use filters::{
    apply_carb_ceiling, apply_glp1_filter, apply_hide_drinks_filter, apply_land_filter,
    apply_search_filter, apply_vegetarian_filter, compare_names, sort_menu,
};
pub use pipeline::filtered_menu;
