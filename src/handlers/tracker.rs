//! Nutrition tracker handlers

use crate::MenuBrowserHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl MenuBrowserHandler {
    /// Adds a serving of a menu item of the selected park to the tracker.
    ///
    /// The same item may be added any number of times.
    pub async fn handle_add_to_tracker(&self, name: String) -> McpResult<String> {
        let name = validation::normalize_item_name(&name);
        let mut state = self.state();

        let added = state
            .add_to_tracker(&name)
            .map_err(validation::browser_error)?;
        let summary = format!(
            "Added {} (Carbs: {}g, Fat: {}g, Calories: {})",
            added.name,
            formatting::format_amount(added.carbs),
            formatting::format_amount(added.fat),
            formatting::format_amount(added.calories)
        );

        Ok(format!(
            "{}\n\n{}",
            summary,
            formatting::format_tracker(state.tracker())
        ))
    }

    /// Shows tracked items and running totals.
    pub async fn handle_tracker(&self) -> McpResult<String> {
        let state = self.state();
        Ok(formatting::format_tracker(state.tracker()))
    }

    /// Expands or collapses the tracker listing.
    pub async fn handle_toggle_tracker(&self) -> McpResult<String> {
        let mut state = self.state();
        state.toggle_tracker();
        Ok(formatting::format_tracker(state.tracker()))
    }
}
