//! Terminal rendering of derived views.

use crate::models::config::OutputFormat;
use crate::models::view::{EpisodeListView, EpisodeOption, Notice, ShowListView, View};
use crate::utils::html;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

const TITLE_WIDTH: usize = 40;
const SUMMARY_WIDTH: usize = 60;

/// Shorten to `width` characters, marking the cut with "...".
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width - 2 {
        format!("{}...", text.chars().take(width - 5).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Start a spinner for an outstanding fetch.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print a failure notice.
pub fn print_notice(notice: &Notice) {
    println!("{}", notice.message().red());
    println!("  {} {}", "->".yellow(), notice.reason());
}

/// Print whichever list the view holds.
pub fn print_view(view: &View, format: OutputFormat) {
    if let Some(notice) = &view.notice {
        print_notice(notice);
    }
    if let Some(shows) = view.shows() {
        print_shows(shows, format);
    } else if let Some(episodes) = view.episodes() {
        print_episodes(episodes, format);
    }
}

/// Print the show list.
pub fn print_shows(view: &ShowListView, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(view),
        OutputFormat::Simple => print_shows_simple(view),
        OutputFormat::Table => print_shows_table(view),
    }
}

/// Print the episode list.
pub fn print_episodes(view: &EpisodeListView, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(view),
        OutputFormat::Simple => print_episodes_simple(view),
        OutputFormat::Table => print_episodes_table(view),
    }
}

/// Print the exact-episode choices.
pub fn print_episode_options(options: &[EpisodeOption]) {
    println!("  {:<10} {}", "all", EpisodeOption::ALL_LABEL);
    for option in options {
        println!("  {:<10} {}", option.code, option.label);
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("Failed to serialize output: {}", e),
    }
}

fn print_shows_simple(view: &ShowListView) {
    if view.visible_shows.is_empty() {
        println!("No shows found.");
        return;
    }

    for show in &view.visible_shows {
        println!("[{}] {} - {}", show.id, show.name, show.genres.join(", "));
    }
}

fn print_shows_table(view: &ShowListView) {
    println!(
        "{}",
        format!(
            "Showing {} of {} shows",
            view.filtered_show_count, view.total_show_count
        )
        .bold()
        .cyan()
    );
    println!();

    if view.visible_shows.is_empty() {
        println!("{}", "No shows found.".yellow());
        return;
    }

    println!(
        " {:>6} | {:<40} | {:>6} | {:<10} | {}",
        "ID", "Name", "Rating", "Status", "Genres"
    );
    println!("{}", "-".repeat(90));

    for show in &view.visible_shows {
        println!(
            " {:>6} | {:<40} | {:>6} | {:<10} | {}",
            show.id,
            truncate(&show.name, TITLE_WIDTH),
            show.rating.map(|r| format!("{:.1}", r)).unwrap_or_default(),
            show.status.as_deref().unwrap_or("?"),
            show.genres.join(", ")
        );
    }
    println!();
}

fn print_episodes_simple(view: &EpisodeListView) {
    if view.visible_episodes.is_empty() {
        println!("No episodes found.");
        return;
    }

    for episode in &view.visible_episodes {
        println!(
            "{} - {}",
            episode.title(),
            html::display_summary(episode.summary_html.as_deref())
        );
    }
}

fn print_episodes_table(view: &EpisodeListView) {
    println!("{}", view.show_name.bold());
    println!(
        "{}",
        format!(
            "Displaying {}/{} episodes",
            view.filtered_episode_count, view.total_episode_count
        )
        .bold()
        .cyan()
    );
    println!();

    if view.visible_episodes.is_empty() {
        println!("{}", "No episodes found.".yellow());
        return;
    }

    println!(" {:<8} | {:<40} | {}", "Code", "Name", "Summary");
    println!("{}", "-".repeat(110));

    for episode in &view.visible_episodes {
        let summary = html::display_summary(episode.summary_html.as_deref());
        println!(
            " {:<8} | {:<40} | {}",
            episode.code(),
            truncate(&episode.name, TITLE_WIDTH),
            truncate(&summary, SUMMARY_WIDTH)
        );
    }
    println!();
}
