//! HireWire job board search client
//!
//! This crate queries the HireWire job-listing site and returns typed job
//! records with pagination metadata. Filters are compiled into the site's
//! path-segment routing scheme; listing pages are extracted with structural
//! CSS selectors.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the public surface for easier access
pub use application::search::JobSearchClient;
pub use domain::filter::{FilterSpec, FlatSelection, HierarchicalSelection};
pub use domain::job::{JobQuery, JobRecord, PageInfo, SearchResult};
pub use infrastructure::config::ClientConfig;
pub use infrastructure::http_client::FetchError;
