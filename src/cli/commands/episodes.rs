//! Episodes command implementation.

use super::render;
use crate::core::NavigationStore;
use crate::models::config::OutputFormat;
use crate::models::Loading;
use anyhow::Result;

/// Load one show's episodes, apply selector and search, and print them.
pub async fn list_episodes(
    store: &mut NavigationStore,
    show_id: u64,
    search: Option<&str>,
    episode: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let pb = render::spinner(Loading::Episodes { show_id }.message());

    // The show list only supplies the heading; episodes still load without it.
    if let Err(e) = store.load_shows().await {
        tracing::warn!("Continuing without show list: {}", e);
    }
    let selected = store.select_show(show_id).await;
    pb.finish_and_clear();
    selected?;

    if let Some(code) = episode {
        if !store.select_episode(code) {
            let view = store.view();
            if let Some(episodes) = view.episodes() {
                println!("Available episodes:");
                render::print_episode_options(&episodes.episode_options);
            }
            anyhow::bail!("Episode '{}' not found for show {}", code, show_id);
        }
    }

    if let Some(term) = search {
        store.set_episode_search(term);
    }

    render::print_view(&store.view(), format);
    Ok(())
}
