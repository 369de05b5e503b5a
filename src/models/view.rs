//! Read-only view projections handed to renderers.

use super::show::{Episode, EpisodeSelector, Show};
use serde::Serialize;

/// Snapshot of everything a renderer needs to paint the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub screen: Screen,
    /// Set while a catalog fetch is outstanding.
    pub loading: Option<Loading>,
    /// Most recent failure, cleared by the next navigation.
    pub notice: Option<Notice>,
}

/// Which list is on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Shows(ShowListView),
    Episodes(EpisodeListView),
}

/// The show list after filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShowListView {
    pub visible_shows: Vec<Show>,
    pub total_show_count: usize,
    pub filtered_show_count: usize,
    pub search_term: String,
}

/// Episodes of the selected show after filtering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeListView {
    pub show_id: u64,
    pub show_name: String,
    pub visible_episodes: Vec<Episode>,
    pub total_episode_count: usize,
    pub filtered_episode_count: usize,
    /// Choices for the exact-episode selector, in episode order.
    pub episode_options: Vec<EpisodeOption>,
    pub search_term: String,
    #[serde(serialize_with = "serialize_selector")]
    pub selector: EpisodeSelector,
}

/// One entry of the exact-episode selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeOption {
    pub code: String,
    pub label: String,
}

impl EpisodeOption {
    /// Label shown for the implicit "all" choice.
    pub const ALL_LABEL: &'static str = "All Episodes";

    pub fn for_episode(episode: &Episode) -> Self {
        let code = episode.code();
        let label = format!("{} - {}", code, episode.name);
        Self { code, label }
    }
}

/// An outstanding fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    Shows,
    Episodes { show_id: u64 },
}

impl Loading {
    pub fn message(&self) -> &'static str {
        match self {
            Loading::Shows => "Loading shows…",
            Loading::Episodes { .. } => "Loading episodes…",
        }
    }
}

/// A user-visible failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The show list could not be populated. Fatal for the session.
    ShowsFailed { reason: String },
    /// One show's episodes could not be loaded. Another show may be picked.
    EpisodesFailed { show_id: u64, reason: String },
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::ShowsFailed { .. } => "Error loading shows. Please refresh.",
            Notice::EpisodesFailed { .. } => "Error loading episodes. Please try another show.",
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Notice::ShowsFailed { reason } => reason,
            Notice::EpisodesFailed { reason, .. } => reason,
        }
    }
}

impl View {
    pub fn is_showing_episodes(&self) -> bool {
        matches!(self.screen, Screen::Episodes(_))
    }

    /// The show list, when it is on screen.
    pub fn shows(&self) -> Option<&ShowListView> {
        match &self.screen {
            Screen::Shows(view) => Some(view),
            Screen::Episodes(_) => None,
        }
    }

    /// The episode list, when it is on screen.
    pub fn episodes(&self) -> Option<&EpisodeListView> {
        match &self.screen {
            Screen::Episodes(view) => Some(view),
            Screen::Shows(_) => None,
        }
    }
}

impl Default for View {
    fn default() -> Self {
        Self {
            screen: Screen::Shows(ShowListView::default()),
            loading: None,
            notice: None,
        }
    }
}

fn serialize_selector<S: serde::Serializer>(
    selector: &EpisodeSelector,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(selector)
}
