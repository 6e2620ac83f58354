//! Section navigation handler

use crate::MenuBrowserHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;
use std::str::FromStr;

/// Named sections of the browser view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Parks,
    Filters,
    Menu,
    Tracker,
}

impl FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('#').to_lowercase().as_str() {
            "parks" => Ok(Anchor::Parks),
            "filters" => Ok(Anchor::Filters),
            "menu" => Ok(Anchor::Menu),
            "tracker" => Ok(Anchor::Tracker),
            _ => Err(format!(
                "Invalid anchor '{}'. Valid anchors: parks, filters, menu, tracker",
                s
            )),
        }
    }
}

impl MenuBrowserHandler {
    /// Jumps to a section of the view and renders it. Changes no state.
    pub async fn handle_scroll_to(&self, anchor: String) -> McpResult<String> {
        let anchor: Anchor = anchor
            .parse()
            .map_err(|e: String| validation::invalid_params(e))?;

        match anchor {
            Anchor::Parks => self.handle_parks().await,
            Anchor::Filters => self.handle_filters().await,
            Anchor::Menu => self.handle_menu().await,
            Anchor::Tracker => self.handle_tracker().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_parse() {
        assert_eq!("#menu".parse::<Anchor>().unwrap(), Anchor::Menu);
        assert_eq!(" Tracker ".parse::<Anchor>().unwrap(), Anchor::Tracker);
        assert!("footer".parse::<Anchor>().is_err());
    }
}
