//! Domain module - filter catalog, filter compilation, and job entities
//!
//! Pure data and logic with no I/O; everything here is exercised by the
//! application layer and directly testable.

pub mod catalog;
pub mod filter;
pub mod job;

// Re-export commonly used items
pub use filter::{FilterSpec, FlatSelection, HierarchicalSelection};
pub use job::{JobQuery, JobRecord, PageInfo, SearchResult};
