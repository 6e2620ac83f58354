use super::derived::DerivedMenuItem;
use super::filter_state::FilterState;
use super::filters;

/// Produce the displayed menu from the derived menu and the filter settings
///
/// Stages run in a fixed order (search, carb ceiling, land, GLP-1,
/// vegetarian, drinks) and are followed by the stable sort. The input is
/// never modified; every call recomputes from scratch.
pub fn filtered_menu<'a>(
    current: &[DerivedMenuItem<'a>],
    filter_state: &FilterState,
) -> Vec<DerivedMenuItem<'a>> {
    let mut items = current.to_vec();

    filters::apply_search_filter(&mut items, &filter_state.search_term);
    filters::apply_carb_ceiling(&mut items, filter_state.max_carbs);
    filters::apply_land_filter(&mut items, &filter_state.land);
    filters::apply_glp1_filter(&mut items, filter_state.glp1_only);
    filters::apply_vegetarian_filter(&mut items, filter_state.vegetarian_only);
    filters::apply_hide_drinks_filter(&mut items, filter_state.hide_drinks);

    filters::sort_menu(&mut items, filter_state.sort_by);
    items
}
