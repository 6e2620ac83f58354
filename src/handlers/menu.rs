//! Menu listing handler

use crate::MenuBrowserHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl MenuBrowserHandler {
    /// Lists the selected park's menu, filtered and sorted by the current settings.
    pub async fn handle_menu(&self) -> McpResult<String> {
        let state = self.state();
        if state.is_loading() {
            return Ok(formatting::LOADING_NOTICE.to_string());
        }

        let park = state.selected_park();
        let items = state.filtered_menu();
        Ok(formatting::format_menu(&park, &items))
    }
}
