//! Command line argument definitions.

use crate::models::config::OutputFormat;
use clap::{Parser, Subcommand};

/// TV Browser - Browse TV shows and episodes from a remote catalog
#[derive(Parser, Debug)]
#[command(name = "tv-browser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    /// Catalog service root URL (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List shows, optionally filtered
    Shows {
        /// Search name, genres and summary
        #[arg(short, long)]
        search: Option<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the episodes of a show
    Episodes {
        /// Catalog ID of the show
        #[arg(value_name = "SHOW_ID")]
        show_id: u64,

        /// Search name, summary and episode code
        #[arg(short, long)]
        search: Option<String>,

        /// Only this episode (e.g., S01E05)
        #[arg(short, long, value_name = "CODE")]
        episode: Option<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Browse interactively
    Browse,
}
