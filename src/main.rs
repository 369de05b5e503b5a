//! TV Browser CLI
//!
//! A command-line tool for browsing TV shows and episodes from a remote catalog.

use clap::Parser;
use std::sync::Arc;
use tv_browser::cli::{
    args::{Cli, Commands},
    commands::{browse, episodes, shows},
};
use tv_browser::core::NavigationStore;
use tv_browser::models::config;
use tv_browser::preflight;
use tv_browser::services::CatalogClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Load configuration, letting the command line win
    let mut config = config::load_config();
    if let Some(base_url) = cli.base_url {
        config.catalog.base_url = base_url;
    }

    let catalog = Arc::new(CatalogClient::from_config(&config.catalog)?);

    // Run preflight checks unless skipped
    if !cli.skip_preflight {
        run_preflight_checks(&catalog).await?;
    }

    let mut store = NavigationStore::new(catalog);

    // Run the appropriate command
    match cli.command {
        Commands::Shows { search, format } => {
            shows::list_shows(
                &mut store,
                search.as_deref(),
                format.unwrap_or(config.browse.format),
            )
            .await?;
        }

        Commands::Episodes {
            show_id,
            search,
            episode,
            format,
        } => {
            episodes::list_episodes(
                &mut store,
                show_id,
                search.as_deref(),
                episode.as_deref(),
                format.unwrap_or(config.browse.format),
            )
            .await?;
        }

        Commands::Browse => {
            browse::browse(
                &mut store,
                config.browse.auto_select_first,
                config.browse.format,
            )
            .await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("tv_browser=debug")
    } else {
        EnvFilter::new("tv_browser=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(catalog: &CatalogClient) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(catalog).await;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
