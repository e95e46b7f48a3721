//! Infrastructure layer - HTTP transport, configuration, logging, and HTML parsing.

pub mod config;
pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod query;

// Re-export commonly used items
pub use config::ClientConfig;
pub use http_client::{FetchError, HttpClient, HttpClientConfig};
pub use parsing::{JobListParser, PaginationParser};
