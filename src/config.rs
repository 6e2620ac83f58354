//! Configuration file support
//!
//! An optional TOML file names the catalog source and seeds the starting
//! filter settings. It is only ever read.

use crate::loader::CatalogSource;
use crate::menu::{FilterState, SortBy};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalog file path or http(s) URL
    pub source: Option<String>,
    /// Starting filter settings
    pub filters: FilterDefaults,
}

/// Filter settings applied at startup
///
/// Land and search term are not configurable; they always start cleared.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterDefaults {
    pub sort_by: SortBy,
    pub max_carbs: Option<f64>,
    pub glp1_only: bool,
    pub vegetarian_only: bool,
    pub hide_drinks: bool,
}

impl FilterDefaults {
    pub fn to_filter_state(&self) -> FilterState {
        let mut filters = FilterState {
            sort_by: self.sort_by,
            glp1_only: self.glp1_only,
            vegetarian_only: self.vegetarian_only,
            hide_drinks: self.hide_drinks,
            ..FilterState::default()
        };
        filters.set_max_carbs(self.max_carbs);
        filters
    }
}

impl Config {
    /// Read a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the configured source when one is given on the command line
    pub fn with_source(mut self, source: Option<String>) -> Self {
        if source.is_some() {
            self.source = source;
        }
        self
    }

    /// The catalog source to load from
    pub fn catalog_source(&self) -> Result<CatalogSource> {
        match self.source.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Ok(s.parse::<CatalogSource>()?),
            _ => bail!("No catalog source given. Pass a file path or URL, or set `source` in the config file."),
        }
    }
}
