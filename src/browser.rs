//! Browser state
//!
//! `BrowserState` is the single explicit state object for a session: the
//! loaded catalog, the park selection, the filter settings and the
//! tracker. Every derived view is recomputed from it on demand.

use crate::catalog::{Catalog, Park};
use crate::error::BrowserError;
use crate::loader::{LoadError, LoadState};
use crate::menu::{self, DerivedMenuItem, FilterState, LandFilter, SortBy};
use crate::tracker::{Tracker, TrackerItem};
use std::borrow::Cow;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    catalog: Catalog,
    load_state: LoadState,
    selected_park_id: Option<String>,
    filters: FilterState,
    tracker: Tracker,
}

fn find_park<'a>(catalog: &'a Catalog, id: Option<&str>) -> Option<&'a Park> {
    id.and_then(|id| catalog.find_park(id))
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with initial filter settings (e.g., from configuration)
    ///
    /// Land and search term always start cleared.
    pub fn with_filters(mut filters: FilterState) -> Self {
        filters.reset_for_park_change();
        Self {
            filters,
            ..Self::default()
        }
    }

    // Loading

    /// Mark the startup load as in progress
    ///
    /// # Returns
    /// `false` when a load was already started, in which case nothing
    /// should be fetched
    pub fn begin_loading(&mut self) -> bool {
        if self.load_state != LoadState::NotLoaded {
            warn!("Catalog load already started ({:?}); ignoring", self.load_state);
            return false;
        }
        self.load_state = LoadState::Loading;
        true
    }

    /// Record the outcome of the startup load
    ///
    /// On success the first park becomes the selection. On failure the
    /// catalog stays empty. Either way loading is over; later calls are
    /// ignored.
    pub fn finish_loading(&mut self, result: Result<Catalog, LoadError>) {
        if self.load_state.is_finished() {
            warn!("Catalog load already finished; ignoring second result");
            return;
        }

        match result {
            Ok(catalog) => {
                info!(
                    parks = catalog.parks.len(),
                    items = catalog.item_count(),
                    "Loaded park data"
                );
                self.selected_park_id = catalog.first_park_id().map(str::to_string);
                self.catalog = catalog;
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                error!("Failed to load park data: {}", e);
                self.catalog = Catalog::new();
                self.selected_park_id = None;
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // Selection

    pub fn selected_park_id(&self) -> Option<&str> {
        self.selected_park_id.as_deref()
    }

    /// Select a park by ID
    ///
    /// Changing the selection clears the land and search settings; picking
    /// the already-selected park changes nothing.
    ///
    /// # Returns
    /// Whether the selection changed
    pub fn select_park(&mut self, id: &str) -> Result<bool, BrowserError> {
        if self.is_loading() {
            return Err(BrowserError::StillLoading);
        }
        if self.catalog.find_park(id).is_none() {
            return Err(BrowserError::UnknownPark {
                id: id.to_string(),
                available: self
                    .catalog
                    .park_ids()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            });
        }
        if self.selected_park_id.as_deref() == Some(id) {
            debug!("Park '{}' already selected", id);
            return Ok(false);
        }

        self.selected_park_id = Some(id.to_string());
        self.filters.reset_for_park_change();
        info!("Selected park '{}'; land and search reset", id);
        Ok(true)
    }

    /// The selected park, if there is one
    pub fn active_park(&self) -> Option<&Park> {
        find_park(&self.catalog, self.selected_park_id.as_deref())
    }

    /// The selected park, or the placeholder park when nothing is selected
    pub fn selected_park(&self) -> Cow<'_, Park> {
        match self.active_park() {
            Some(park) => Cow::Borrowed(park),
            None => Cow::Owned(Park::placeholder()),
        }
    }

    // Derived views

    /// Every item of the selected park with its GLP-1 flag, in catalog order
    pub fn current_menu(&self) -> Vec<DerivedMenuItem<'_>> {
        self.active_park()
            .map(menu::current_menu)
            .unwrap_or_default()
    }

    /// The menu as displayed: filtered and sorted by the current settings
    pub fn filtered_menu(&self) -> Vec<DerivedMenuItem<'_>> {
        menu::filtered_menu(&self.current_menu(), &self.filters)
    }

    // Filter setters

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filters.search_term = term.into();
    }

    pub fn set_max_carbs(&mut self, max_carbs: Option<f64>) {
        self.filters.set_max_carbs(max_carbs);
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.filters.sort_by = sort_by;
    }

    /// Select a land of the current park, or "All"
    pub fn set_land(&mut self, land: LandFilter) -> Result<(), BrowserError> {
        if let LandFilter::Only(ref name) = land {
            let park = self.selected_park();
            if !park.has_land(name) {
                return Err(BrowserError::UnknownLand {
                    land: name.clone(),
                    park: park.name.clone(),
                    available: park.lands.clone(),
                });
            }
        }
        self.filters.land = land;
        Ok(())
    }

    pub fn set_glp1_only(&mut self, enabled: bool) {
        self.filters.glp1_only = enabled;
    }

    pub fn set_vegetarian_only(&mut self, enabled: bool) {
        self.filters.vegetarian_only = enabled;
    }

    pub fn set_hide_drinks(&mut self, enabled: bool) {
        self.filters.hide_drinks = enabled;
    }

    // Tracker

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Add the selected park's first menu item named `name` to the tracker
    pub fn add_to_tracker(&mut self, name: &str) -> Result<TrackerItem, BrowserError> {
        if self.is_loading() {
            return Err(BrowserError::StillLoading);
        }
        let park = find_park(&self.catalog, self.selected_park_id.as_deref());
        let Some(item) = park.and_then(|p| p.find_item(name)) else {
            return Err(BrowserError::ItemNotFound {
                name: name.to_string(),
                park: park
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| Park::placeholder().name),
            });
        };
        info!("Added '{}' to tracker", item.name);
        Ok(self.tracker.add(item))
    }

    pub fn toggle_tracker(&mut self) -> bool {
        self.tracker.toggle_expanded()
    }
}
