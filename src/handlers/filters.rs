//! Filter handlers

use crate::MenuBrowserHandler;
use crate::formatting;
use crate::menu::LandFilter;
use crate::validation;
use mcp_attr::Result as McpResult;

impl MenuBrowserHandler {
    /// Updates filter settings. Omitted parameters keep their current value.
    ///
    /// All parameters are validated before anything changes, so a rejected
    /// call leaves the settings untouched.
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_set_filters(
        &self,
        search: Option<String>,
        max_carbs: Option<f64>,
        sort_by: Option<String>,
        land: Option<String>,
        glp1_only: Option<bool>,
        vegetarian_only: Option<bool>,
        hide_drinks: Option<bool>,
    ) -> McpResult<String> {
        let sort_by = sort_by
            .as_deref()
            .map(validation::parse_sort_by)
            .transpose()?;
        let max_carbs = max_carbs.map(validation::parse_max_carbs).transpose()?;

        let mut state = self.state();

        if let Some(land) = land {
            state
                .set_land(LandFilter::from(land.trim()))
                .map_err(validation::browser_error)?;
        }
        if let Some(term) = search {
            state.set_search_term(term);
        }
        if let Some(max_carbs) = max_carbs {
            state.set_max_carbs(max_carbs);
        }
        if let Some(sort_by) = sort_by {
            state.set_sort_by(sort_by);
        }
        if let Some(enabled) = glp1_only {
            state.set_glp1_only(enabled);
        }
        if let Some(enabled) = vegetarian_only {
            state.set_vegetarian_only(enabled);
        }
        if let Some(enabled) = hide_drinks {
            state.set_hide_drinks(enabled);
        }

        let matching = state.filtered_menu().len();
        Ok(format!(
            "{}\nMatching items: {}",
            formatting::format_filters(state.filters()),
            matching
        ))
    }

    /// Shows the current filter and sort settings.
    pub async fn handle_filters(&self) -> McpResult<String> {
        let state = self.state();
        Ok(formatting::format_filters(state.filters()))
    }
}
