//! Interactive browse command.
//!
//! Reads one command per line from stdin, applies it to the navigation store
//! and repaints whenever the store publishes a new view.

use super::render;
use crate::core::{Mode, NavigationStore};
use crate::models::config::OutputFormat;
use crate::models::Loading;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Set the search term of the current list. Empty clears it.
    Search(String),
    /// Open a show's episode list.
    Show(u64),
    /// Set the exact-episode selector from a code, or `all`.
    Episode(String),
    /// Return to the show list.
    Back,
    /// Repaint the current list.
    List,
    /// Show the exact-episode choices.
    Options,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse a line of input.
    pub fn parse(input: &str) -> std::result::Result<Self, String> {
        let line = input.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(BrowseCommand::Search(rest.to_string())),
            "show" => rest
                .parse()
                .map(BrowseCommand::Show)
                .map_err(|_| format!("Invalid show ID: '{}'", rest)),
            "episode" | "ep" => Ok(BrowseCommand::Episode(episode_argument(input))),
            "back" | "b" => Ok(BrowseCommand::Back),
            "list" | "ls" => Ok(BrowseCommand::List),
            "options" => Ok(BrowseCommand::Options),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
            "" => Err("Type 'help' for commands.".to_string()),
            other => Err(format!("Unknown command: '{}'. Type 'help' for commands.", other)),
        }
    }
}

/// Everything after the command word and its separating space, untrimmed,
/// so codes with surrounding spaces can still be typed.
fn episode_argument(input: &str) -> String {
    let input = input.trim_start().trim_end_matches(['\r', '\n']);
    match input.split_once(char::is_whitespace) {
        Some((_, rest)) => rest.to_string(),
        None => String::new(),
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  search <term>     Filter the current list (empty term clears)");
    println!("  show <id>         Open a show's episodes");
    println!("  episode <code>    Only one episode, or 'all'");
    println!("  options           List episode codes");
    println!("  back              Return to the show list");
    println!("  list              Repaint the current list");
    println!("  quit              Exit");
}

/// Run the interactive session until `quit` or end of input.
pub async fn browse(
    store: &mut NavigationStore,
    auto_select_first: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut views = store.subscribe();

    let pb = render::spinner(Loading::Shows.message());
    let loaded = store.load_shows().await;
    pb.finish_and_clear();
    if let Err(e) = loaded {
        render::print_view(&store.view(), format);
        return Err(e.into());
    }

    if auto_select_first {
        if let Some(first) = store.shows().first().map(|s| s.id) {
            let pb = render::spinner(Loading::Episodes { show_id: first }.message());
            let selected = store.select_first_show().await;
            pb.finish_and_clear();
            if let Err(e) = selected {
                tracing::debug!("{}", e);
            }
        }
    }

    render::print_view(&views.borrow_and_update(), format);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", ">".green());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match BrowseCommand::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{}", msg.yellow());
                continue;
            }
        };

        let mut repaint = false;

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => print_help(),
            BrowseCommand::List => repaint = true,
            BrowseCommand::Search(term) => {
                match store.mode() {
                    Mode::Shows => store.set_show_search(&term),
                    Mode::Episodes => store.set_episode_search(&term),
                };
            }
            BrowseCommand::Show(show_id) => {
                if store.find_show(show_id).is_none() {
                    println!("{}", crate::Error::UnknownShow(show_id).to_string().red());
                    continue;
                }
                select(store, show_id).await;
            }
            BrowseCommand::Episode(input) => {
                if store.episodes_for_selected_show().is_none() {
                    println!("{}", "Open a show first: show <id>".yellow());
                } else if !store.select_episode(&input) {
                    println!("{}", "Unknown episode code. Type 'options' to list them.".yellow());
                }
            }
            BrowseCommand::Options => match store.view().episodes() {
                Some(view) => render::print_episode_options(&view.episode_options),
                None => println!("{}", "Open a show first: show <id>".yellow()),
            },
            BrowseCommand::Back => store.go_back_to_shows(),
        }

        if repaint || views.has_changed().unwrap_or(false) {
            let view = views.borrow_and_update().clone();
            render::print_view(&view, format);
        }
    }

    Ok(())
}

/// Select a show, showing a spinner while its episodes load.
///
/// Failures are reported through the view's notice.
async fn select(store: &mut NavigationStore, show_id: u64) {
    let pending = store.begin_select(show_id);
    let pb = render::spinner(Loading::Episodes { show_id }.message());
    let outcome = pending.resolve().await;
    pb.finish_and_clear();

    if let Err(e) = store.complete_select(outcome) {
        tracing::debug!("{}", e);
    }
}
