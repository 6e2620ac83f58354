use thiserror::Error;

/// Errors raised by user actions on the browser state
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrowserError {
    #[error("Park data is still loading. Try again once loading has finished.")]
    StillLoading,

    #[error("Park '{id}' does not exist. {}", available_list("parks", .available))]
    UnknownPark { id: String, available: Vec<String> },

    #[error(
        "Land '{land}' is not part of {park}. {}",
        available_list("lands (or \"All\")", .available)
    )]
    UnknownLand {
        land: String,
        park: String,
        available: Vec<String>,
    },

    #[error("No menu item named '{name}' in {park}.")]
    ItemNotFound { name: String, park: String },
}

fn available_list(what: &str, available: &[String]) -> String {
    if available.is_empty() {
        format!("No {} are available.", what)
    } else {
        format!("Available {}: {}", what, available.join(", "))
    }
}
