use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel land value meaning "no land filter"
pub const ALL_LANDS: &str = "All";

/// Sort order for the displayed menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Name ascending
    #[default]
    Name,
    /// Carbohydrates, lowest first
    CarbsAsc,
    /// Carbohydrates, highest first
    CarbsDesc,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortBy::Name),
            "carbs_asc" => Ok(SortBy::CarbsAsc),
            "carbs_desc" => Ok(SortBy::CarbsDesc),
            _ => Err(format!(
                "Invalid sort '{}'. Valid options are: name, carbs_asc, carbs_desc",
                s
            )),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortBy::Name => "name",
            SortBy::CarbsAsc => "carbs_asc",
            SortBy::CarbsDesc => "carbs_desc",
        };
        f.write_str(name)
    }
}

/// Land selection: every land, or exactly one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LandFilter {
    #[default]
    All,
    Only(String),
}

impl LandFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, LandFilter::All)
    }
}

impl From<&str> for LandFilter {
    fn from(s: &str) -> Self {
        if s == ALL_LANDS {
            LandFilter::All
        } else {
            LandFilter::Only(s.to_string())
        }
    }
}

impl fmt::Display for LandFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandFilter::All => f.write_str(ALL_LANDS),
            LandFilter::Only(land) => f.write_str(land),
        }
    }
}

/// User-controlled filter and sort settings
///
/// Mutated directly by user input. `land` and `search_term` are
/// park-specific and are cleared whenever the selected park changes;
/// everything else carries over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Case-insensitive substring matched against name, description and restaurant
    pub search_term: String,
    /// Inclusive carb ceiling; ignored unless positive
    pub max_carbs: Option<f64>,
    pub sort_by: SortBy,
    pub land: LandFilter,
    pub glp1_only: bool,
    pub vegetarian_only: bool,
    pub hide_drinks: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the park-specific settings (land and search term)
    pub fn reset_for_park_change(&mut self) {
        self.land = LandFilter::All;
        self.search_term.clear();
    }

    /// Set or clear the carb ceiling; non-positive values clear it
    pub fn set_max_carbs(&mut self, max_carbs: Option<f64>) {
        self.max_carbs = max_carbs.filter(|c| *c > 0.0);
    }

    /// The carb ceiling, if one is in effect
    pub fn carb_ceiling(&self) -> Option<f64> {
        self.max_carbs.filter(|c| *c > 0.0)
    }

    /// True when no stage of the pipeline would drop an item
    pub fn is_passthrough(&self) -> bool {
        self.search_term.is_empty()
            && self.carb_ceiling().is_none()
            && self.land.is_all()
            && !self.glp1_only
            && !self.vegetarian_only
            && !self.hide_drinks
    }
}
