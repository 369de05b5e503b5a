//! Catalog service preflight check.

use super::CheckResult;
use crate::error::FetchFailure;
use crate::services::CatalogClient;

/// Check if the catalog service answers the show list request.
pub async fn check(catalog: &CatalogClient) -> CheckResult {
    match catalog.fetch_shows().await {
        Ok(shows) => CheckResult::ok(
            "Catalog",
            &format!("{} shows available at {}", shows.len(), catalog.base_url()),
        ),
        Err(FetchFailure::Status { status, reason }) => CheckResult::fail(
            "Catalog",
            &format!("service returned {} {}", status, reason),
            "Check --base-url or the TV_BROWSER_BASE_URL environment variable",
        ),
        Err(FetchFailure::Decode(_)) => CheckResult::fail(
            "Catalog",
            "unexpected response format",
            "Point --base-url at a TVmaze-compatible service",
        ),
        Err(FetchFailure::Transport(_)) => CheckResult::fail(
            "Catalog",
            "connection failed",
            "Check your network connection",
        ),
    }
}
