//! CLI command implementations.

pub mod browse;
pub mod episodes;
pub mod render;
pub mod shows;
