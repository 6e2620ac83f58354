//! Validation helper functions for the menu browser server
//!
//! This module turns raw tool parameters into typed values and maps
//! domain errors onto MCP errors.

use crate::error::BrowserError;
use crate::menu::SortBy;
use mcp_attr::Result as McpResult;

/// Build an INVALID_PARAMS error whose message is shown to the client
pub fn invalid_params(message: impl Into<String>) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message.into(), true)
}

/// Map a browser error onto an MCP error
pub fn browser_error(error: BrowserError) -> mcp_attr::Error {
    invalid_params(error.to_string())
}

/// Parse and validate a sort parameter
///
/// # Arguments
/// * `sort_str` - One of "name", "carbs_asc", "carbs_desc"
pub fn parse_sort_by(sort_str: &str) -> McpResult<SortBy> {
    sort_str.trim().parse::<SortBy>().map_err(|e| invalid_params(e))
}

/// Validate a carb ceiling parameter
///
/// Any finite number is accepted; zero or below clears the ceiling.
pub fn parse_max_carbs(max_carbs: f64) -> McpResult<Option<f64>> {
    if !max_carbs.is_finite() {
        return Err(invalid_params(format!(
            "Invalid max_carbs '{}'. Use a number of grams, or 0 to clear the limit",
            max_carbs
        )));
    }
    Ok((max_carbs > 0.0).then_some(max_carbs))
}

/// Normalize a menu item name given by the client
pub fn normalize_item_name(name: &str) -> String {
    name.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_by() {
        assert_eq!(parse_sort_by(" carbs_desc ").unwrap(), SortBy::CarbsDesc);
        assert!(parse_sort_by("fat").is_err());
    }

    #[test]
    fn test_parse_max_carbs() {
        assert_eq!(parse_max_carbs(30.0).unwrap(), Some(30.0));
        assert_eq!(parse_max_carbs(0.0).unwrap(), None);
        assert_eq!(parse_max_carbs(-1.0).unwrap(), None);
        assert!(parse_max_carbs(f64::NAN).is_err());
    }
}
