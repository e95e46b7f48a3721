//! Parser construction errors.
//!
//! Extraction itself degrades gracefully on missing markup; the only way a
//! parser fails is an invalid selector or pattern at construction time.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ParseError {
    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
