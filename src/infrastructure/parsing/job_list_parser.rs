//! Job-card extraction from listing-page HTML.
//!
//! One record per job card, in document order. Every field access degrades
//! gracefully: a missing node or attribute resolves to the field's
//! documented fallback, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ParseError, ParseResult};
use crate::domain::job::JobRecord;

/// Index of the location node among the card's repeated meta nodes.
const LOCATION_META_INDEX: usize = 1;

/// Delimiter between tag texts (Unicode bullet).
const TAG_DELIMITER: char = '\u{2022}';

/// Last non-empty path segment of a permalink, optional trailing slash.
static JOB_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/([^/]+)/?$").expect("job id pattern is valid"));

/// CSS selectors for job listing pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListSelectors {
    /// Selector for job card containers
    pub job_card: String,
    /// Selector for the card permalink anchor
    pub permalink: String,
    /// Selector for the job title
    pub title: String,
    /// Selector for the company name
    pub company: String,
    /// Selector for the company avatar image
    pub picture: String,
    /// Selector for the description node inside the card's adjacent sibling
    pub description: String,
    /// Selector for the repeated meta nodes (location, icon values)
    pub meta: String,
    /// Selector for the tags node
    pub tags: String,
    /// Selector for the time-posted icon marker
    pub icon_time_posted: String,
    /// Selector for the work-option icon marker
    pub icon_work_option: String,
    /// Selector for the employee-count icon marker
    pub icon_employees: String,
}

impl Default for JobListSelectors {
    fn default() -> Self {
        Self {
            job_card: r#"[data-id="job-card"]"#.to_string(),
            permalink: "a#job-card-alias".to_string(),
            title: "h2 a".to_string(),
            company: r#"[data-id="company-title"]"#.to_string(),
            picture: r#"picture [data-id="company-img"]"#.to_string(),
            description: ".fs-xs.fw-regular.mb-md".to_string(),
            meta: ".font-barlow.text-gray-03".to_string(),
            tags: ".font-barlow.fw-medium.mb-md".to_string(),
            icon_time_posted: ".fa-regular.fa-clock.fs-xs.text-pretty-blue".to_string(),
            icon_work_option: ".fa-regular.fa-signal-stream.fs-xs.text-pretty-blue".to_string(),
            icon_employees: ".fa-regular.fa-user-group.fs-xs.text-pretty-blue".to_string(),
        }
    }
}

/// Parser for extracting job records from listing pages.
pub struct JobListParser {
    job_card: Selector,
    permalink: Selector,
    title: Selector,
    company: Selector,
    picture: Selector,
    description: Selector,
    meta: Selector,
    tags: Selector,
    icon_time_posted: Selector,
    icon_work_option: Selector,
    icon_employees: Selector,
}

impl JobListParser {
    /// Create a parser with the default selectors.
    pub fn new() -> ParseResult<Self> {
        Self::with_selectors(&JobListSelectors::default())
    }

    /// Create a parser with custom selector configuration.
    pub fn with_selectors(selectors: &JobListSelectors) -> ParseResult<Self> {
        Ok(Self {
            job_card: Self::compile(&selectors.job_card)?,
            permalink: Self::compile(&selectors.permalink)?,
            title: Self::compile(&selectors.title)?,
            company: Self::compile(&selectors.company)?,
            picture: Self::compile(&selectors.picture)?,
            description: Self::compile(&selectors.description)?,
            meta: Self::compile(&selectors.meta)?,
            tags: Self::compile(&selectors.tags)?,
            icon_time_posted: Self::compile(&selectors.icon_time_posted)?,
            icon_work_option: Self::compile(&selectors.icon_work_option)?,
            icon_employees: Self::compile(&selectors.icon_employees)?,
        })
    }

    fn compile(selector: &str) -> ParseResult<Selector> {
        Selector::parse(selector).map_err(|e| ParseError::invalid_selector(selector, e))
    }

    /// Extract one record per job card, preserving document order.
    ///
    /// `base_url` is prepended verbatim to each card's raw permalink to form
    /// `application_link`; no path-separator normalization is applied.
    pub fn extract_jobs(&self, html: &Html, base_url: &str) -> Vec<JobRecord> {
        let jobs: Vec<JobRecord> = html
            .select(&self.job_card)
            .map(|card| self.extract_job(card, base_url))
            .collect();

        debug!("Extracted {} job cards", jobs.len());
        jobs
    }

    fn extract_job(&self, card: ElementRef<'_>, base_url: &str) -> JobRecord {
        let permalink = card
            .select(&self.permalink)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);

        let id = permalink.as_deref().and_then(job_id_from_permalink);
        let application_link = format!("{}{}", base_url, permalink.as_deref().unwrap_or(""));

        let title = self.text_of(card, &self.title);
        let company = self.text_of(card, &self.company);

        let picture = card
            .select(&self.picture)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string);

        // The description lives in the card's adjacent sibling, not inside
        // the card's own subtree.
        let description = card
            .next_siblings()
            .find_map(ElementRef::wrap)
            .and_then(|sibling| sibling.select(&self.description).next())
            .map(|node| node.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let location = card
            .select(&self.meta)
            .nth(LOCATION_META_INDEX)
            .map(|node| node.text().collect::<String>())
            .unwrap_or_default();

        // Splitting the (possibly empty) tag text always yields at least one
        // piece, so a card without tags produces a single empty element.
        let tags_text = card
            .select(&self.tags)
            .next()
            .map(|node| node.text().collect::<String>())
            .unwrap_or_default();
        let tags = tags_text
            .split(TAG_DELIMITER)
            .map(|tag| tag.trim().to_string())
            .collect();

        JobRecord {
            id,
            title,
            company,
            picture,
            application_link,
            location,
            time_posted: self.icon_value(card, &self.icon_time_posted),
            work_option: self.icon_value(card, &self.icon_work_option),
            employees: self.icon_value(card, &self.icon_employees),
            description,
            tags,
        }
    }

    fn text_of(&self, card: ElementRef<'_>, selector: &Selector) -> String {
        card.select(selector)
            .next()
            .map(|node| node.text().collect::<String>())
            .unwrap_or_default()
    }

    /// Read the value paired with an icon marker: the first node bearing the
    /// marker class, then the text of the meta node immediately following
    /// the marker's parent. Absent marker, parent, or sibling all yield an
    /// empty string.
    fn icon_value(&self, card: ElementRef<'_>, icon: &Selector) -> String {
        let Some(marker) = card.select(icon).next() else {
            return String::new();
        };
        let Some(parent) = marker.parent() else {
            return String::new();
        };
        let Some(value) = parent.next_siblings().find_map(ElementRef::wrap) else {
            return String::new();
        };
        if !self.meta.matches(&value) {
            return String::new();
        }
        value.text().collect::<String>().trim().to_string()
    }
}

/// Parse the job id from the last non-empty path segment of a permalink.
/// `None` when no segment matches or the segment is not numeric.
fn job_id_from_permalink(permalink: &str) -> Option<i64> {
    JOB_ID_PATTERN
        .captures(permalink)
        .and_then(|captures| captures.get(1))
        .and_then(|segment| segment.as_str().parse::<i64>().ok())
}
