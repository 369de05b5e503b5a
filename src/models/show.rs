//! Show and episode data models.

use crate::utils::html;
use serde::{Deserialize, Serialize};

/// Sentinel selector value meaning "no exact-episode filter".
pub const ALL_EPISODES: &str = "all";

/// A TV show from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Catalog ID, unique and stable.
    pub id: u64,
    /// Show name.
    pub name: String,
    /// Summary as delivered by the catalog (may contain markup).
    pub summary_html: Option<String>,
    /// Genres in catalog order.
    pub genres: Vec<String>,
    /// Airing status (e.g., "Running", "Ended").
    pub status: Option<String>,
    /// Average user rating (0-10).
    pub rating: Option<f32>,
    /// Runtime in minutes.
    pub runtime_minutes: Option<u32>,
    /// Poster image URL.
    pub image_url: Option<String>,
}

impl Show {
    /// Summary with markup removed, empty when absent.
    pub fn plain_summary(&self) -> String {
        html::strip_tags(self.summary_html.as_deref())
    }
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode name.
    pub name: String,
    /// Season number.
    pub season: Option<u32>,
    /// Episode number within the season.
    pub number: Option<u32>,
    /// Summary as delivered by the catalog (may contain markup).
    pub summary_html: Option<String>,
    /// Still image URL.
    pub image_url: Option<String>,
    /// Catalog page for this episode.
    pub page_url: Option<String>,
}

impl Episode {
    /// Episode code, e.g. `S01E05`.
    ///
    /// Falls back to the episode name when season or number is missing.
    /// Always derived, never stored.
    pub fn code(&self) -> String {
        match (self.season, self.number) {
            (Some(season), Some(number)) => format!("S{:02}E{:02}", season, number),
            _ if self.name.is_empty() => "Episode".to_string(),
            _ => self.name.clone(),
        }
    }

    /// Summary with markup removed, empty when absent.
    pub fn plain_summary(&self) -> String {
        html::strip_tags(self.summary_html.as_deref())
    }

    /// Display title: name followed by code.
    pub fn title(&self) -> String {
        format!("{} {}", self.name, self.code())
    }
}

/// Exact-episode filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum EpisodeSelector {
    /// No exact filter.
    #[default]
    All,
    /// Keep only episodes whose code equals this value.
    Code(String),
}

impl EpisodeSelector {
    /// Parse a selector from user input. `"all"` and empty input mean no filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_EPISODES) {
            EpisodeSelector::All
        } else {
            EpisodeSelector::Code(value.to_string())
        }
    }

    /// Resolve user input against the loaded episodes.
    ///
    /// An exact code match wins, so an episode whose code is literally
    /// `"all"` stays selectable and codes with surrounding spaces match as
    /// typed. Otherwise empty input or `"all"` means no filter, and trimmed
    /// input must match a code. Returns `None` for an unknown code.
    pub fn resolve(input: &str, episodes: &[Episode]) -> Option<Self> {
        let has_code = |code: &str| episodes.iter().any(|e| e.code() == code);

        if has_code(input) {
            return Some(EpisodeSelector::Code(input.to_string()));
        }
        match Self::parse(input) {
            EpisodeSelector::All => Some(EpisodeSelector::All),
            EpisodeSelector::Code(code) if has_code(&code) => Some(EpisodeSelector::Code(code)),
            EpisodeSelector::Code(_) => None,
        }
    }

    /// Whether this selector admits the given episode.
    pub fn admits(&self, episode: &Episode) -> bool {
        match self {
            EpisodeSelector::All => true,
            EpisodeSelector::Code(code) => episode.code() == *code,
        }
    }
}

impl std::fmt::Display for EpisodeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EpisodeSelector::All => write!(f, "{}", ALL_EPISODES),
            EpisodeSelector::Code(code) => write!(f, "{}", code),
        }
    }
}

/// Sort shows case-insensitively by name. Stable for equal names.
pub fn sort_shows_by_name(shows: &mut [Show]) {
    shows.sort_by_cached_key(|s| s.name.to_lowercase());
}
