//! Core browsing logic.

pub mod filter;
pub mod navigation;

pub use navigation::{Mode, NavigationStore, PendingSelection, SelectionOutcome, SelectionStatus};
