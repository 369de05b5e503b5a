//! TV Browser Library
//!
//! Browse a remote catalog of TV shows and their episodes, with text search
//! and exact-episode selection.
//!
//! - `services` - catalog client with a per-session single-flight cache
//! - `core` - filtering and the two-screen navigation store
//! - `models` - shows, episodes, configuration and read-only views
//! - `cli` - command-line renderer

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, FetchFailure, Result};
