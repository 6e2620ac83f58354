//! Catalog loading
//!
//! The catalog is fetched exactly once at startup, either from a local file
//! or over HTTP. A failed fetch is terminal for the session: there is no
//! retry and no partially parsed catalog is ever kept.

use crate::catalog::Catalog;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Where the catalog document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl FromStr for CatalogSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(CatalogSource::Url(s.to_string()))
        } else {
            Ok(CatalogSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("response was not ok: {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Lifecycle of the single startup load
///
/// `NotLoaded → Loading → Loaded | Failed`; both outcomes are terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    /// True until the load has finished, whatever the outcome
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::NotLoaded | LoadState::Loading)
    }

    pub fn is_finished(&self) -> bool {
        !self.is_loading()
    }
}

/// Parse a catalog document
pub fn parse_catalog(content: &str) -> Result<Catalog, LoadError> {
    Ok(serde_json::from_str(content)?)
}

/// Fetch and parse the catalog from `source`
///
/// HTTP responses must have a success status; anything else is reported
/// as `LoadError::Status` without looking at the body.
pub async fn fetch_catalog(source: &CatalogSource) -> Result<Catalog, LoadError> {
    let content = match source {
        CatalogSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
        CatalogSource::Url(url) => {
            let response = reqwest::get(url).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status));
            }
            response.text().await?
        }
    };
    parse_catalog(&content)
}
