//! Application layer - orchestration of filter compilation, fetch, and extraction.

pub mod search;

// Re-export commonly used items
pub use search::JobSearchClient;
