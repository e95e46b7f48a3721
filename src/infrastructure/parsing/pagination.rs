//! Total-page-count extraction from pagination markup.
//!
//! The pagination control has no machine-readable total, so the reader
//! collects every digit run from the control's text. The first number is
//! the current/previous-page control; the meaningful maximum is the second.

use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use super::error::{ParseError, ParseResult};

/// Index of the digit token that carries the last page number.
const TOTAL_PAGES_TOKEN_INDEX: usize = 1;

/// CSS selectors for the pagination control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationSelectors {
    pub items: String,
}

impl Default for PaginationSelectors {
    fn default() -> Self {
        Self {
            items: "nav ul.pagination li".to_string(),
        }
    }
}

/// Reader for the listing page's pagination control.
pub struct PaginationParser {
    items: Selector,
    digits: Regex,
}

impl PaginationParser {
    /// Create a reader with the default selectors.
    pub fn new() -> ParseResult<Self> {
        Self::with_selectors(&PaginationSelectors::default())
    }

    /// Create a reader with custom selector configuration.
    pub fn with_selectors(selectors: &PaginationSelectors) -> ParseResult<Self> {
        Ok(Self {
            items: Selector::parse(&selectors.items)
                .map_err(|e| ParseError::invalid_selector(&selectors.items, e))?,
            digits: Regex::new(r"\d+")?,
        })
    }

    /// Read the last page number from the pagination text.
    ///
    /// Returns `None` when the control carries no numeric tokens at all.
    /// When tokens exist but there is no second one, the lookup degenerates
    /// to `Some(0)` - a documented sharp edge kept for compatibility with
    /// the markup this heuristic was written against. `Some(0)` is reserved
    /// for that case: a second token too large for `u32` saturates to
    /// `u32::MAX` instead of falling into the degenerate value.
    pub fn read_total_pages(&self, html: &Html) -> Option<u32> {
        let text: String = html
            .select(&self.items)
            .flat_map(|item| item.text())
            .collect();

        let tokens: Vec<&str> = self.digits.find_iter(&text).map(|m| m.as_str()).collect();
        if tokens.is_empty() {
            return None;
        }

        // Tokens are pure digit runs, so parsing only fails on overflow.
        let total = tokens
            .get(TOTAL_PAGES_TOKEN_INDEX)
            .map(|token| token.parse::<u32>().unwrap_or(u32::MAX))
            .unwrap_or(0);
        Some(total)
    }
}
