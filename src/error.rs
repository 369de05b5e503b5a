//! Error types for the TV browser.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// A failed call to the catalog service.
///
/// Cloneable so a single cached failure can be handed to every caller
/// waiting on the same URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    #[error("transport failed: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Main error type for the TV browser.
#[derive(Error, Debug)]
pub enum Error {
    // Catalog errors
    #[error("Error loading shows. Please refresh. ({0})")]
    ShowsUnavailable(FetchFailure),

    #[error("Error loading episodes. Please try another show. (show {show_id}: {failure})")]
    EpisodesUnavailable { show_id: u64, failure: FetchFailure },

    #[error("Show not found in catalog: {0}")]
    UnknownShow(u64),

    // Config errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_display() {
        let failure = FetchFailure::Status {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(failure.to_string(), "404 Not Found");
    }

    #[test]
    fn test_episodes_unavailable_display() {
        let err = Error::EpisodesUnavailable {
            show_id: 7,
            failure: FetchFailure::Transport("connection reset".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Error loading episodes. Please try another show. (show 7: transport failed: connection reset)"
        );
    }
}
