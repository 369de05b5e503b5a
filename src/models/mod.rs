//! Data models.

pub mod config;
pub mod show;
pub mod view;

pub use show::{Episode, EpisodeSelector, Show};
pub use view::{EpisodeListView, EpisodeOption, Loading, Notice, Screen, ShowListView, View};
