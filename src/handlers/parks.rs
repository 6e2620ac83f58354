//! Park list and selection handlers

use crate::MenuBrowserHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl MenuBrowserHandler {
    /// Lists the parks with the current selection marked.
    pub async fn handle_parks(&self) -> McpResult<String> {
        let state = self.state();
        Ok(formatting::format_parks(&state))
    }

    /// Selects a park. Switching parks clears the land and search filters.
    pub async fn handle_select_park(&self, id: String) -> McpResult<String> {
        let id = id.trim();
        let mut state = self.state();

        let changed = state.select_park(id).map_err(validation::browser_error)?;
        let park = state.selected_park();

        if changed {
            Ok(format!(
                "Selected {} ({}). Land and search filters were reset.",
                park.name, id
            ))
        } else {
            Ok(format!("{} ({}) is already selected.", park.name, id))
        }
    }
}
