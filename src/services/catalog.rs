//! Catalog service client (TVmaze-compatible API).

use super::cache::{CachedFetch, FetchCache};
use super::transport::{FetchResult, HttpTransport, Transport};
use crate::error::FetchFailure;
use crate::models::config::CatalogConfig;
use crate::models::{Episode, Show};
use crate::Result;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

/// Show as delivered by the catalog.
#[derive(Debug, Deserialize)]
pub struct ShowItem {
    pub id: u64,
    pub name: String,
    pub summary: Option<String>,
    pub genres: Option<Vec<String>>,
    pub status: Option<String>,
    pub rating: Option<RatingInfo>,
    pub runtime: Option<u32>,
    pub image: Option<ImageInfo>,
}

/// Episode as delivered by the catalog.
#[derive(Debug, Deserialize)]
pub struct EpisodeItem {
    pub name: Option<String>,
    pub season: Option<u32>,
    pub number: Option<u32>,
    pub summary: Option<String>,
    pub image: Option<ImageInfo>,
    pub url: Option<String>,
}

/// Rating block.
#[derive(Debug, Deserialize)]
pub struct RatingInfo {
    pub average: Option<f32>,
}

/// Image URLs in two sizes.
#[derive(Debug, Deserialize)]
pub struct ImageInfo {
    pub medium: Option<String>,
    pub original: Option<String>,
}

impl ImageInfo {
    /// Preferred URL: medium, then original.
    fn best(self) -> Option<String> {
        self.medium.or(self.original)
    }
}

impl From<ShowItem> for Show {
    fn from(item: ShowItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            summary_html: item.summary,
            genres: item.genres.unwrap_or_default(),
            status: item.status,
            rating: item.rating.and_then(|r| r.average),
            runtime_minutes: item.runtime,
            image_url: item.image.and_then(ImageInfo::best),
        }
    }
}

impl From<EpisodeItem> for Episode {
    fn from(item: EpisodeItem) -> Self {
        Self {
            name: item.name.unwrap_or_default(),
            season: item.season,
            number: item.number,
            summary_html: item.summary,
            image_url: item.image.and_then(ImageInfo::best),
            page_url: item.url,
        }
    }
}

/// Catalog client with a per-session single-flight cache.
///
/// Each distinct request URL is fetched at most once; later and concurrent
/// calls for the same URL share the first call's outcome.
pub struct CatalogClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    shows: FetchCache<Arc<Vec<Show>>>,
    episodes: FetchCache<Arc<Vec<Episode>>>,
}

impl CatalogClient {
    /// Create a client over any transport.
    pub fn new(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            shows: FetchCache::new(),
            episodes: FetchCache::new(),
        }
    }

    /// Create an HTTP client from configuration.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), &config.base_url))
    }

    /// Service root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the show list.
    pub fn shows_url(&self) -> String {
        format!("{}/shows", self.base_url)
    }

    /// URL of one show's episode list.
    pub fn episodes_url(&self, show_id: u64) -> String {
        format!("{}/shows/{}/episodes", self.base_url, show_id)
    }

    /// Shared fetch of the show list, in catalog order.
    pub fn request_shows(&self) -> CachedFetch<Arc<Vec<Show>>> {
        let url = self.shows_url();
        self.shows.get_or_fetch(&url, || {
            decode_list::<ShowItem, Show>(self.transport.get_json(&url))
        })
    }

    /// Shared fetch of one show's episodes, in catalog order.
    pub fn request_episodes(&self, show_id: u64) -> CachedFetch<Arc<Vec<Episode>>> {
        let url = self.episodes_url(show_id);
        self.episodes.get_or_fetch(&url, || {
            decode_list::<EpisodeItem, Episode>(self.transport.get_json(&url))
        })
    }

    /// Fetch the show list.
    pub async fn fetch_shows(&self) -> FetchResult<Arc<Vec<Show>>> {
        self.request_shows().await
    }

    /// Fetch the episodes of a show.
    pub async fn fetch_episodes(&self, show_id: u64) -> FetchResult<Arc<Vec<Episode>>> {
        self.request_episodes(show_id).await
    }

    /// Whether a fetch for the given show's episodes has been started.
    pub fn has_episodes(&self, show_id: u64) -> bool {
        self.episodes.contains(&self.episodes_url(show_id))
    }

    /// Number of distinct URLs requested so far.
    pub fn cached_request_count(&self) -> usize {
        self.shows.len() + self.episodes.len()
    }
}

/// Decode a JSON array of wire items into models.
fn decode_list<W, M>(
    body: BoxFuture<'static, FetchResult<serde_json::Value>>,
) -> BoxFuture<'static, FetchResult<Arc<Vec<M>>>>
where
    W: DeserializeOwned + Into<M> + Send + 'static,
    M: Send + Sync + 'static,
{
    async move {
        let value = body.await?;
        let items: Vec<W> =
            serde_json::from_value(value).map_err(|e| FetchFailure::Decode(e.to_string()))?;
        Ok(Arc::new(items.into_iter().map(Into::into).collect()))
    }
    .boxed()
}
