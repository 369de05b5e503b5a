//! Single-flight request cache.
//!
//! One entry per request URL holds the shared, possibly still pending, fetch.
//! Every caller for the same URL awaits that one fetch and observes the same
//! outcome, failures included. Entries live as long as the cache.

use super::transport::FetchResult;
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// A fetch that can be awaited by any number of callers.
pub type CachedFetch<T> = Shared<BoxFuture<'static, FetchResult<T>>>;

/// URL-keyed map of pending, resolved or failed fetches.
pub struct FetchCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    entries: Mutex<HashMap<String, CachedFetch<T>>>,
}

impl<T> FetchCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the fetch for `url`, starting it with `fetch` only on first use.
    ///
    /// The lock is released before the caller awaits, so concurrent callers
    /// never block each other while the request is in flight.
    pub fn get_or_fetch<F>(&self, url: &str, fetch: F) -> CachedFetch<T>
    where
        F: FnOnce() -> BoxFuture<'static, FetchResult<T>>,
    {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = entries.get(url) {
            tracing::debug!("Cache hit: {}", url);
            return existing.clone();
        }

        tracing::debug!("Cache miss: {}", url);
        let shared = fetch().shared();
        entries.insert(url.to_string(), shared.clone());
        shared
    }

    /// Whether a fetch for `url` has been started.
    pub fn contains(&self, url: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(url)
    }

    /// Number of URLs seen.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for FetchCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
