//! Session navigation state.
//!
//! Two screens: the show list (initial) and the episode list of one show.
//! Every transition that changes a filter or completes a fetch recomputes the
//! view from the full, unfiltered collections and publishes it immediately.
//!
//! ```text
//!   Shows ──select──► (loading) ──ok──► Episodes
//!     ▲                   │ err               │
//!     │                   └── stays put       │
//!     └───────────────── back ◄───────────────┘
//! ```
//!
//! Selections are numbered. Only the outcome of the most recently issued
//! selection is applied; slower results of earlier selections are dropped.

use crate::core::filter;
use crate::error::{Error, FetchFailure};
use crate::models::show::sort_shows_by_name;
use crate::models::view::{
    EpisodeListView, EpisodeOption, Loading, Notice, Screen, ShowListView, View,
};
use crate::models::{Episode, EpisodeSelector, Show};
use crate::services::cache::CachedFetch;
use crate::services::{CatalogClient, FetchResult};
use crate::Result;
use std::sync::Arc;
use tokio::sync::watch;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Shows,
    Episodes,
}

/// What happened to a completed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    /// The episodes are now on screen.
    Applied,
    /// A newer selection (or a return to the show list) replaced this one.
    Superseded,
}

/// Episodes together with the show they were fetched for.
#[derive(Debug, Clone)]
struct LoadedEpisodes {
    show_id: u64,
    episodes: Arc<Vec<Episode>>,
}

#[derive(Debug, Default)]
struct SessionState {
    shows: Arc<Vec<Show>>,
    show_search_term: String,
    selected_show_id: Option<u64>,
    episodes: Option<LoadedEpisodes>,
    episode_search_term: String,
    episode_selector: EpisodeSelector,
}

/// A show selection whose episode fetch has been issued but not applied.
pub struct PendingSelection {
    generation: u64,
    show_id: u64,
    fetch: CachedFetch<Arc<Vec<Episode>>>,
}

/// A resolved selection, ready for [`NavigationStore::complete_select`].
#[derive(Debug)]
pub struct SelectionOutcome {
    generation: u64,
    show_id: u64,
    result: FetchResult<Arc<Vec<Episode>>>,
}

impl PendingSelection {
    pub fn show_id(&self) -> u64 {
        self.show_id
    }

    /// Wait for the episode fetch.
    pub async fn resolve(self) -> SelectionOutcome {
        let result = self.fetch.await;
        SelectionOutcome {
            generation: self.generation,
            show_id: self.show_id,
            result,
        }
    }
}

impl SelectionOutcome {
    pub fn show_id(&self) -> u64 {
        self.show_id
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Owns the session state and publishes derived views to renderers.
pub struct NavigationStore {
    catalog: Arc<CatalogClient>,
    state: SessionState,
    generation: u64,
    loading: Option<Loading>,
    notice: Option<Notice>,
    publisher: watch::Sender<View>,
}

impl NavigationStore {
    pub fn new(catalog: Arc<CatalogClient>) -> Self {
        let (publisher, _) = watch::channel(View::default());
        Self {
            catalog,
            state: SessionState::default(),
            generation: 0,
            loading: None,
            notice: None,
            publisher,
        }
    }

    // ---------- Queries ----------

    pub fn mode(&self) -> Mode {
        if self.state.episodes.is_some() {
            Mode::Episodes
        } else {
            Mode::Shows
        }
    }

    /// All shows, sorted case-insensitively by name.
    pub fn shows(&self) -> &[Show] {
        &self.state.shows
    }

    pub fn find_show(&self, show_id: u64) -> Option<&Show> {
        self.state.shows.iter().find(|s| s.id == show_id)
    }

    pub fn selected_show_id(&self) -> Option<u64> {
        self.state.selected_show_id
    }

    /// Episodes of the selected show, if they have been fetched for it.
    pub fn episodes_for_selected_show(&self) -> Option<&[Episode]> {
        let loaded = self.state.episodes.as_ref()?;
        if Some(loaded.show_id) == self.state.selected_show_id {
            Some(loaded.episodes.as_slice())
        } else {
            None
        }
    }

    pub fn show_search_term(&self) -> &str {
        &self.state.show_search_term
    }

    pub fn episode_search_term(&self) -> &str {
        &self.state.episode_search_term
    }

    pub fn episode_selector(&self) -> &EpisodeSelector {
        &self.state.episode_selector
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Current derived view.
    pub fn view(&self) -> View {
        self.publisher.borrow().clone()
    }

    /// Receive every published view.
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.publisher.subscribe()
    }

    // ---------- Transitions ----------

    /// Populate the show list. The list is fetched once per session.
    pub async fn load_shows(&mut self) -> Result<()> {
        if !self.state.shows.is_empty() {
            return Ok(());
        }

        self.loading = Some(Loading::Shows);
        self.notice = None;
        self.publish();

        let result = self.catalog.fetch_shows().await;
        self.loading = None;

        match result {
            Ok(shows) => {
                let mut sorted = shows.as_ref().clone();
                sort_shows_by_name(&mut sorted);
                tracing::info!("Loaded {} shows", sorted.len());
                self.state.shows = Arc::new(sorted);
                self.publish();
                Ok(())
            }
            Err(failure) => {
                tracing::warn!("Failed to load shows: {}", failure);
                self.notice = Some(Notice::ShowsFailed {
                    reason: failure.to_string(),
                });
                self.publish();
                Err(Error::ShowsUnavailable(failure))
            }
        }
    }

    /// Start selecting a show: record the selection and issue its fetch.
    ///
    /// The returned selection must be resolved and passed back to
    /// [`complete_select`](Self::complete_select).
    pub fn begin_select(&mut self, show_id: u64) -> PendingSelection {
        self.generation += 1;
        self.state.selected_show_id = Some(show_id);
        self.loading = Some(Loading::Episodes { show_id });
        self.notice = None;
        self.publish();

        tracing::debug!("Selecting show {} (request {})", show_id, self.generation);

        PendingSelection {
            generation: self.generation,
            show_id,
            fetch: self.catalog.request_episodes(show_id),
        }
    }

    /// Apply a resolved selection if it is still the latest one.
    pub fn complete_select(&mut self, outcome: SelectionOutcome) -> Result<SelectionStatus> {
        if outcome.generation != self.generation {
            tracing::debug!(
                "Discarding stale episodes for show {} (request {}, latest {})",
                outcome.show_id,
                outcome.generation,
                self.generation
            );
            return Ok(SelectionStatus::Superseded);
        }

        self.loading = None;

        match outcome.result {
            Ok(episodes) => {
                tracing::info!(
                    "Loaded {} episodes for show {}",
                    episodes.len(),
                    outcome.show_id
                );
                self.state.episodes = Some(LoadedEpisodes {
                    show_id: outcome.show_id,
                    episodes,
                });
                self.state.episode_search_term.clear();
                self.state.episode_selector = EpisodeSelector::All;
                self.publish();
                Ok(SelectionStatus::Applied)
            }
            Err(failure) => {
                tracing::warn!(
                    "Failed to load episodes for show {}: {}",
                    outcome.show_id,
                    failure
                );
                self.notice = Some(episodes_notice(outcome.show_id, &failure));
                self.publish();
                Err(Error::EpisodesUnavailable {
                    show_id: outcome.show_id,
                    failure,
                })
            }
        }
    }

    /// Select a show and wait for its episodes.
    pub async fn select_show(&mut self, show_id: u64) -> Result<SelectionStatus> {
        let pending = self.begin_select(show_id);
        let outcome = pending.resolve().await;
        self.complete_select(outcome)
    }

    /// Select the alphabetically first show, if any.
    pub async fn select_first_show(&mut self) -> Result<Option<SelectionStatus>> {
        let Some(first) = self.state.shows.first().map(|s| s.id) else {
            return Ok(None);
        };
        self.select_show(first).await.map(Some)
    }

    /// Return to the show list. The show search term is kept.
    pub fn go_back_to_shows(&mut self) {
        // Invalidate any selection still in flight.
        self.generation += 1;
        self.state.selected_show_id = None;
        self.state.episodes = None;
        self.state.episode_search_term.clear();
        self.state.episode_selector = EpisodeSelector::All;
        self.loading = None;
        self.notice = None;
        self.publish();
    }

    /// Update the show search term. Ignored outside the show list.
    pub fn set_show_search(&mut self, term: &str) -> bool {
        if self.mode() != Mode::Shows {
            tracing::warn!("Show search ignored while viewing episodes");
            return false;
        }
        self.state.show_search_term = term.to_string();
        self.publish();
        true
    }

    /// Update the episode search term.
    ///
    /// Ignored unless the selected show's episodes are on screen.
    pub fn set_episode_search(&mut self, term: &str) -> bool {
        if self.episodes_for_selected_show().is_none() {
            tracing::warn!("Episode search ignored: no episodes loaded for the selected show");
            return false;
        }
        self.state.episode_search_term = term.to_string();
        self.publish();
        true
    }

    /// Update the exact-episode selector.
    ///
    /// Ignored unless the selected show's episodes are on screen, or when the
    /// code is not one of those episodes' codes.
    pub fn set_episode_selector(&mut self, selector: EpisodeSelector) -> bool {
        let known = match (self.episodes_for_selected_show(), &selector) {
            (None, _) => {
                tracing::warn!("Episode selector ignored: no episodes loaded for the selected show");
                return false;
            }
            (Some(_), EpisodeSelector::All) => true,
            (Some(episodes), EpisodeSelector::Code(code)) => {
                episodes.iter().any(|e| e.code() == *code)
            }
        };
        if !known {
            tracing::warn!("Unknown episode code: {}", selector);
            return false;
        }

        self.state.episode_selector = selector;
        self.publish();
        true
    }

    /// Select an episode from user input, resolved against the loaded codes.
    ///
    /// See [`EpisodeSelector::resolve`]. Returns `false` when nothing matches
    /// or no episodes are loaded for the selected show.
    pub fn select_episode(&mut self, input: &str) -> bool {
        let resolved = self
            .episodes_for_selected_show()
            .map(|episodes| EpisodeSelector::resolve(input, episodes));

        match resolved {
            Some(Some(selector)) => self.set_episode_selector(selector),
            Some(None) => {
                tracing::warn!("Unknown episode code: {:?}", input);
                false
            }
            None => {
                tracing::warn!("Episode selector ignored: no episodes loaded for the selected show");
                false
            }
        }
    }

    // ---------- Derived view ----------

    fn publish(&self) {
        self.publisher.send_replace(self.derive_view());
    }

    fn derive_view(&self) -> View {
        let screen = match &self.state.episodes {
            None => Screen::Shows(self.derive_show_list()),
            Some(loaded) => Screen::Episodes(self.derive_episode_list(loaded)),
        };

        View {
            screen,
            loading: self.loading,
            notice: self.notice.clone(),
        }
    }

    fn derive_show_list(&self) -> ShowListView {
        let shows = &self.state.shows;
        let visible_shows = filter::filter_shows(shows, &self.state.show_search_term);

        ShowListView {
            total_show_count: shows.len(),
            filtered_show_count: visible_shows.len(),
            visible_shows,
            search_term: self.state.show_search_term.clone(),
        }
    }

    fn derive_episode_list(&self, loaded: &LoadedEpisodes) -> EpisodeListView {
        let episodes = &loaded.episodes;
        let visible_episodes = filter::filter_episodes(
            episodes,
            &self.state.episode_selector,
            &self.state.episode_search_term,
        );

        let show_name = self
            .find_show(loaded.show_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("Show #{}", loaded.show_id));

        EpisodeListView {
            show_id: loaded.show_id,
            show_name,
            total_episode_count: episodes.len(),
            filtered_episode_count: visible_episodes.len(),
            visible_episodes,
            episode_options: episodes.iter().map(EpisodeOption::for_episode).collect(),
            search_term: self.state.episode_search_term.clone(),
            selector: self.state.episode_selector.clone(),
        }
    }
}

fn episodes_notice(show_id: u64, failure: &FetchFailure) -> Notice {
    Notice::EpisodesFailed {
        show_id,
        reason: failure.to_string(),
    }
}
