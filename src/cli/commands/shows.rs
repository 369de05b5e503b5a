//! Shows command implementation.

use super::render;
use crate::core::NavigationStore;
use crate::models::config::OutputFormat;
use crate::models::Loading;
use anyhow::Result;

/// Load the show list, apply the search term and print it.
pub async fn list_shows(
    store: &mut NavigationStore,
    search: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let pb = render::spinner(Loading::Shows.message());
    let loaded = store.load_shows().await;
    pb.finish_and_clear();
    loaded?;

    if let Some(term) = search {
        store.set_show_search(term);
    }

    render::print_view(&store.view(), format);
    Ok(())
}
