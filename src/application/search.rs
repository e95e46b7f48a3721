//! Job search orchestration: compile filters, fetch, extract, assemble.

use anyhow::Result;
use scraper::Html;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::domain::filter::compile_filter_path;
use crate::domain::job::{JobQuery, PageInfo, SearchResult};
use crate::infrastructure::config::{site, ClientConfig};
use crate::infrastructure::http_client::{FetchError, HttpClient};
use crate::infrastructure::parsing::{JobListParser, PaginationParser};
use crate::infrastructure::query::build_query;

/// Client for searching the HireWire job board.
///
/// One `search` call performs exactly one fetch, one parse, and one
/// extraction pass over the returned document.
pub struct JobSearchClient {
    http: HttpClient,
    job_parser: JobListParser,
    pagination_parser: PaginationParser,
    base_url: String,
}

impl JobSearchClient {
    /// Create a client with the default site configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(&config.base_url, &config.http)?,
            job_parser: JobListParser::new()?,
            pagination_parser: PaginationParser::new()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Search job listings for one page.
    ///
    /// The `page` echoed in the result is the caller's requested page, not a
    /// value derived from the response.
    pub async fn search(&self, query: &JobQuery) -> Result<SearchResult, FetchError> {
        let slug = self.request_slug(query);
        let body = self.http.get(&slug).await?;
        Ok(self.assemble(query, &body))
    }

    /// Search with cooperative cancellation; an aborted fetch surfaces as
    /// [`FetchError::Aborted`].
    pub async fn search_with_cancellation(
        &self,
        query: &JobQuery,
        token: &CancellationToken,
    ) -> Result<SearchResult, FetchError> {
        let slug = self.request_slug(query);
        let body = self
            .http
            .fetch_with_cancellation(reqwest::Method::GET, &slug, None, token)
            .await?;
        Ok(self.assemble(query, &body))
    }

    /// Build the site-relative request slug: `jobs/<filter-path>?<query>`.
    /// The query keeps its `?` even when both parts are empty, matching the
    /// site's routing.
    pub fn request_slug(&self, query: &JobQuery) -> String {
        let filter_path = compile_filter_path(query.filter.as_ref());
        let query_string = build_query(&[
            ("search", query.search.clone()),
            ("page", Some(query.page.to_string())),
        ]);
        let slug = format!("{}/{}?{}", site::JOBS_PATH, filter_path, query_string);
        debug!("Compiled request slug: {}", slug);
        slug
    }

    fn assemble(&self, query: &JobQuery, body: &str) -> SearchResult {
        let document = Html::parse_document(body);
        let data = self.job_parser.extract_jobs(&document, &self.base_url);
        let total_pages = self.pagination_parser.read_total_pages(&document);

        info!(
            "Search page {} returned {} jobs (total pages: {:?})",
            query.page,
            data.len(),
            total_pages
        );

        SearchResult {
            data,
            pagination: PageInfo {
                page: query.page,
                total_pages,
            },
        }
    }
}
