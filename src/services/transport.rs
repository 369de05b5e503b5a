//! HTTP transport for the catalog service.

use crate::error::FetchFailure;
use crate::models::config::CatalogConfig;
use crate::Result;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::time::Duration;

/// Result of fetching one URL as JSON.
pub type FetchResult<T> = std::result::Result<T, FetchFailure>;

/// `GET url -> JSON` capability.
///
/// The returned future must not borrow `self` so it can be shared between
/// callers waiting on the same URL.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: &str) -> BoxFuture<'static, FetchResult<serde_json::Value>>;
}

/// Transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport using the configured timeout.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("tv_browser/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &str) -> BoxFuture<'static, FetchResult<serde_json::Value>> {
        let request = self.client.get(url);
        let url = url.to_string();

        async move {
            tracing::debug!("GET {}", url);

            let resp = request
                .send()
                .await
                .map_err(|e| FetchFailure::Transport(e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(FetchFailure::Status {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("").to_string(),
                });
            }

            resp.json::<serde_json::Value>().await.map_err(|e| {
                if e.is_decode() {
                    FetchFailure::Decode(e.to_string())
                } else {
                    FetchFailure::Transport(e.to_string())
                }
            })
        }
        .boxed()
    }
}
