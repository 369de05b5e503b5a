//! External service clients.

pub mod cache;
pub mod catalog;
pub mod transport;

pub use catalog::CatalogClient;
pub use transport::{FetchResult, HttpTransport, Transport};
