//! Park Menu MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for browsing
//! theme-park menus. It loads a catalog of parks and their menu items once at
//! startup, lets the client search, filter and sort the selected park's menu,
//! flags GLP-1 friendly items, and keeps a running nutrition tally of chosen
//! items.
//!
//! # Architecture
//!
//! - **MCP Layer**: `MenuBrowserHandler` - tool surface over a single session state
//! - **Domain Layer**: `catalog`, `menu`, `tracker` and `browser` modules - data
//!   model, the filter/sort pipeline and the tracker
//! - **Loading Layer**: `loader` module - one-shot catalog fetch from a file or URL
//!
//! # Example
//!
//! ```no_run
//! use park_menu_mcp::{CatalogSource, FilterState, MenuBrowserHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source: CatalogSource = "data/sample-parks.json".parse()?;
//!     let handler = MenuBrowserHandler::new(source, FilterState::default());
//!     handler.load().await;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod loader;
pub mod menu;
pub mod tracker;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::info;

// Re-export commonly used types
pub use browser::BrowserState;
pub use catalog::{Catalog, ItemType, MenuItem, Park};
pub use config::Config;
pub use error::BrowserError;
pub use loader::{CatalogSource, LoadError, LoadState};
pub use menu::{DerivedMenuItem, FilterState, LandFilter, SortBy};
pub use tracker::{Totals, Tracker, TrackerItem};

/// MCP Server handler for the park menu browser
///
/// Owns the session's `BrowserState`. The catalog is fetched once through
/// [`MenuBrowserHandler::load`]; every tool afterwards works on in-memory
/// state only.
pub struct MenuBrowserHandler {
    pub(crate) state: Mutex<BrowserState>,
    source: CatalogSource,
}

impl MenuBrowserHandler {
    /// Create a handler that will load its catalog from `source`
    ///
    /// # Arguments
    /// * `source` - Catalog file path or URL
    /// * `filters` - Starting filter settings
    pub fn new(source: CatalogSource, filters: FilterState) -> Self {
        Self {
            state: Mutex::new(BrowserState::with_filters(filters)),
            source,
        }
    }

    /// Create a handler from a merged configuration
    ///
    /// # Returns
    /// Result containing the handler, or an error when no source is configured
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = config.catalog_source()?;
        Ok(Self::new(source, config.filters.to_filter_state()))
    }

    /// Fetch the catalog and record the outcome
    ///
    /// Never fails: a load error is logged and leaves an empty catalog.
    /// Only the first call fetches; later calls return immediately.
    pub async fn load(&self) {
        let started = self.state().begin_loading();
        if !started {
            return;
        }
        info!("Loading park data from {}", self.source);
        let result = loader::fetch_catalog(&self.source).await;
        self.state().finish_loading(result);
    }

    /// Lock the session state
    ///
    /// The state is plain data, so a poisoned lock is recovered.
    pub(crate) fn state(&self) -> MutexGuard<'_, BrowserState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against a read-only view of the session state
    pub fn with_state<R>(&self, f: impl FnOnce(&BrowserState) -> R) -> R {
        f(&*self.state())
    }
}

/// Theme-park menu browser with dietary filters and a nutrition tracker.
///
/// Workflow:
/// 1. `parks` to see the loaded parks (the first one is selected automatically)
/// 2. `select_park` to switch parks (clears the land and search filters)
/// 3. `set_filters` to search, cap carbs, pick a land, sort, or toggle
///    GLP-1 friendly / vegetarian / hide-drinks
/// 4. `menu` to list matching items
/// 5. `add_to_tracker` for each serving eaten, `tracker` for running totals
///
/// GLP-1 friendly means: food (not drink), not fried, under 400 calories and under 20g fat.
#[mcp_server]
impl McpServer for MenuBrowserHandler {
    /// **Parks**: List loaded parks with their lands and menu sizes. The selected park is marked.
    #[tool]
    async fn parks(&self) -> McpResult<String> {
        self.handle_parks().await
    }

    /// **Select Park**: Switch to another park by ID. Resets land and search; other filters stay.
    #[tool]
    async fn select_park(
        &self,
        /// Park ID as shown by `parks` (e.g., "magic-kingdom")
        id: String,
    ) -> McpResult<String> {
        self.handle_select_park(id).await
    }

    /// **Filter/Sort**: Change filter settings. Omitted parameters keep their current value.
    #[allow(clippy::too_many_arguments)]
    #[tool]
    async fn set_filters(
        &self,
        /// Search text matched in name, description and restaurant; ""=clear (optional)
        search: Option<String>,
        /// Maximum carbs in grams (inclusive); 0=no limit (optional)
        max_carbs: Option<f64>,
        /// Sort: name/carbs_asc/carbs_desc (optional)
        sort_by: Option<String>,
        /// Land of the selected park, or "All" (optional)
        land: Option<String>,
        /// Only GLP-1 friendly items (optional)
        glp1_only: Option<bool>,
        /// Only vegetarian items (optional)
        vegetarian_only: Option<bool>,
        /// Hide drinks (optional)
        hide_drinks: Option<bool>,
    ) -> McpResult<String> {
        self.handle_set_filters(
            search,
            max_carbs,
            sort_by,
            land,
            glp1_only,
            vegetarian_only,
            hide_drinks,
        )
        .await
    }

    /// **Filters**: Show the current filter and sort settings.
    #[tool]
    async fn filters(&self) -> McpResult<String> {
        self.handle_filters().await
    }

    /// **Menu**: List the selected park's menu items that match the current filters, in sort order.
    #[tool]
    async fn menu(&self) -> McpResult<String> {
        self.handle_menu().await
    }

    /// **Track**: Add one serving of a menu item (selected park, exact name) to the nutrition tracker.
    #[tool]
    async fn add_to_tracker(
        &self,
        /// Menu item name exactly as listed by `menu`
        name: String,
    ) -> McpResult<String> {
        self.handle_add_to_tracker(name).await
    }

    /// **Tracker**: Show tracked items with total carbs, fat and calories.
    #[tool]
    async fn tracker(&self) -> McpResult<String> {
        self.handle_tracker().await
    }

    /// **Toggle Tracker**: Expand or collapse the tracked item list (totals are always shown).
    #[tool]
    async fn toggle_tracker(&self) -> McpResult<String> {
        self.handle_toggle_tracker().await
    }

    /// **Scroll To**: Jump to a section and show it: parks/filters/menu/tracker.
    #[tool]
    async fn scroll_to(
        &self,
        /// Section anchor: parks/filters/menu/tracker
        anchor: String,
    ) -> McpResult<String> {
        self.handle_scroll_to(anchor).await
    }
}
