//! HTML parsing infrastructure for listing pages.
//!
//! Parsers compile their CSS selectors once at construction and stay
//! reusable across calls. Field absence during extraction is never an
//! error; only selector or pattern compilation can fail.

pub mod error;
pub mod job_list_parser;
pub mod pagination;

// Re-export public types
pub use error::{ParseError, ParseResult};
pub use job_list_parser::{JobListParser, JobListSelectors};
pub use pagination::{PaginationParser, PaginationSelectors};
