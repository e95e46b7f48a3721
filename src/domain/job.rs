//! Job listing entities and search result types.

use serde::{Deserialize, Serialize};

use crate::domain::filter::FilterSpec;

/// One job posting extracted from a listing-page card.
///
/// Records are built in a single pass over the document and are immutable
/// afterwards. Optional fields carry their documented fallback instead of
/// failing extraction: `None` for `id`/`picture`, empty strings for the
/// text fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Numeric id parsed from the last path segment of the card permalink.
    /// `None` when the permalink is absent or the segment is not numeric.
    pub id: Option<i64>,
    pub title: String,
    pub company: String,
    /// Company avatar image URL, when the card carries one.
    pub picture: Option<String>,
    /// Base URL concatenated with the raw permalink, no normalization.
    pub application_link: String,
    pub location: String,
    pub time_posted: String,
    pub work_option: String,
    pub employees: String,
    pub description: String,
    /// Bullet-separated tag texts, each trimmed. Best-effort: a card without
    /// a tag node yields a single empty element.
    pub tags: Vec<String>,
}

/// Pagination metadata returned alongside the extracted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// The page the caller requested, echoed back verbatim.
    pub page: u32,
    /// Last page number read from the pagination markup, `None` when the
    /// markup carries no numeric tokens at all.
    pub total_pages: Option<u32>,
}

/// Result of one listing-page search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub data: Vec<JobRecord>,
    pub pagination: PageInfo,
}

/// Input for a single search call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobQuery {
    /// Structured filter criteria; `None` compiles to an empty path fragment.
    pub filter: Option<FilterSpec>,
    /// Free-text search term; absent or empty terms are dropped from the query string.
    pub search: Option<String>,
    /// 1-based listing page to request.
    pub page: u32,
}
