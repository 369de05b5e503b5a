//! Show and episode filtering.
//!
//! All functions are pure: they never reorder or mutate their input and
//! always return a subset in the original order.

use crate::models::{Episode, EpisodeSelector, Show};

/// Case-insensitive substring test against an already-lowercased needle.
fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Whether a show matches a lowercased search term.
///
/// Matches name, comma-joined genres, or summary text without markup.
pub fn show_matches(show: &Show, term_lower: &str) -> bool {
    contains_folded(&show.name, term_lower)
        || contains_folded(&show.genres.join(", "), term_lower)
        || contains_folded(&show.plain_summary(), term_lower)
}

/// Whether an episode matches a lowercased search term.
///
/// Matches name, summary text without markup, or episode code.
pub fn episode_matches(episode: &Episode, term_lower: &str) -> bool {
    contains_folded(&episode.name, term_lower)
        || contains_folded(&episode.plain_summary(), term_lower)
        || contains_folded(&episode.code(), term_lower)
}

/// Filter shows by search term. An empty term keeps every show.
pub fn filter_shows(shows: &[Show], term: &str) -> Vec<Show> {
    if term.is_empty() {
        return shows.to_vec();
    }

    let term_lower = term.to_lowercase();
    shows
        .iter()
        .filter(|show| show_matches(show, &term_lower))
        .cloned()
        .collect()
}

/// Filter episodes by exact selector, then by search term.
///
/// The selector narrows first; the text predicate is applied to what
/// remains. An episode is kept only when both hold.
pub fn filter_episodes(episodes: &[Episode], selector: &EpisodeSelector, term: &str) -> Vec<Episode> {
    let term_lower = term.to_lowercase();

    episodes
        .iter()
        .filter(|episode| selector.admits(episode))
        .filter(|episode| term_lower.is_empty() || episode_matches(episode, &term_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: u64, name: &str, genres: &[&str], summary: Option<&str>) -> Show {
        Show {
            id,
            name: name.to_string(),
            summary_html: summary.map(str::to_string),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            status: None,
            rating: None,
            runtime_minutes: None,
            image_url: None,
        }
    }

    fn episode(name: &str, season: u32, number: u32, summary: Option<&str>) -> Episode {
        Episode {
            name: name.to_string(),
            season: Some(season),
            number: Some(number),
            summary_html: summary.map(str::to_string),
            image_url: None,
            page_url: None,
        }
    }

    #[test]
    fn test_show_matches_fields() {
        let s = show(1, "Archer", &["Comedy", "Action"], Some("<p>A <b>spy</b> agency.</p>"));
        assert!(show_matches(&s, "arch"));
        assert!(show_matches(&s, "comedy"));
        assert!(show_matches(&s, "comedy, action"));
        assert!(show_matches(&s, "spy agency"));
        assert!(!show_matches(&s, "drama"));
    }

    #[test]
    fn test_show_summary_markup_not_matched() {
        let s = show(1, "Archer", &[], Some("<p>A spy.</p>"));
        assert!(!show_matches(&s, "<p>"));
    }

    #[test]
    fn test_filter_shows_empty_term_keeps_all() {
        let shows = vec![show(2, "Zeta", &[], None), show(1, "Alpha", &[], None)];
        assert_eq!(filter_shows(&shows, ""), shows);
    }

    #[test]
    fn test_filter_shows_case_insensitive() {
        let shows = vec![
            show(1, "Archer", &[], None),
            show(2, "Breaking Bad", &[], None),
        ];
        let result = filter_shows(&shows, "ARCH");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Archer");
    }

    #[test]
    fn test_episode_matches_code() {
        let ep = episode("Pilot", 1, 5, None);
        assert!(episode_matches(&ep, "s01e05"));
        assert!(episode_matches(&ep, "e05"));
        assert!(!episode_matches(&ep, "s01e06"));
    }

    #[test]
    fn test_missing_summary_does_not_match_placeholder() {
        let ep = episode("Pilot", 1, 1, None);
        assert!(!episode_matches(&ep, "no summary"));
    }

    #[test]
    fn test_filter_episodes_selector_then_term() {
        let episodes = vec![
            episode("Pilot", 1, 1, None),
            episode("Cool", 1, 2, None),
            episode("Cooler", 1, 3, None),
        ];
        let selector = EpisodeSelector::parse("S01E02");

        let result = filter_episodes(&episodes, &selector, "cool");
        assert_eq!(result, vec![episodes[1].clone()]);

        let result = filter_episodes(&episodes, &selector, "pilot");
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_episodes_preserves_order() {
        let episodes = vec![
            episode("B side", 2, 1, None),
            episode("A side", 1, 1, None),
            episode("C side", 1, 2, None),
        ];
        let result = filter_episodes(&episodes, &EpisodeSelector::All, "side");
        assert_eq!(result, episodes);
    }
}
