//! HTTP fetch collaborator with typed error taxonomy and cancellation.
//!
//! The client owns no retry, timeout-policy, or rate-limiting logic beyond
//! the single reqwest timeout; callers that need such policies wrap this
//! client. Errors distinguish the four transport conditions the rest of the
//! crate cares about: error status, no response, request setup failure, and
//! cooperative abort.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Transport-level failure, surfaced to the caller without internal retries.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server responded with a non-success status code.
    #[error("server responded with status {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// The request was dispatched but no usable response came back
    /// (connection refused, timeout, body read failure).
    #[error("no response received from {url}: {source}")]
    NoResponse {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be constructed or dispatched at all.
    #[error("failed to set up request for {url}: {source}")]
    RequestSetup {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Cancellation was requested before or during the request.
    #[error("request aborted: {url}")]
    Aborted { url: String },
}

impl FetchError {
    fn from_reqwest(error: reqwest::Error, url: &str) -> Self {
        if error.is_builder() {
            Self::RequestSetup {
                url: url.to_string(),
                source: error,
            }
        } else {
            Self::NoResponse {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        use crate::infrastructure::config::defaults;
        Self {
            user_agent: defaults::USER_AGENT.to_string(),
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            follow_redirects: true,
        }
    }
}

/// Thin wrapper over reqwest bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client for the given base URL.
    pub fn new(base_url: impl Into<String>, config: &HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch a site-relative slug and return the raw response body.
    ///
    /// `body` is attached as JSON for non-GET methods when present.
    pub async fn fetch(
        &self,
        method: Method,
        slug: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<String, FetchError> {
        let url = self.url_for(slug);
        info!("Fetching {} {}", method, url);

        let mut request = self.client.request(method, url.as_str());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error {} for {}", status, url);
            return Err(FetchError::Status { status, url });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, &url))?;

        debug!("Fetched {} ({} chars)", url, text.len());
        Ok(text)
    }

    /// Fetch with cooperative cancellation: the token aborts the in-flight
    /// request and the body read, surfacing `FetchError::Aborted` instead of
    /// a transport error.
    pub async fn fetch_with_cancellation(
        &self,
        method: Method,
        slug: &str,
        body: Option<&serde_json::Value>,
        token: &CancellationToken,
    ) -> Result<String, FetchError> {
        let url = self.url_for(slug);

        if token.is_cancelled() {
            return Err(FetchError::Aborted { url });
        }

        info!("Fetching {} {} (cancellable)", method, url);

        let mut request = self.client.request(method, url.as_str());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = tokio::select! {
            result = request.send() => {
                result.map_err(|e| FetchError::from_reqwest(e, &url))?
            }
            _ = token.cancelled() => {
                warn!("Request cancelled for {}", url);
                return Err(FetchError::Aborted { url });
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error {} for {}", status, url);
            return Err(FetchError::Status { status, url });
        }

        let text = tokio::select! {
            result = response.text() => {
                result.map_err(|e| FetchError::from_reqwest(e, &url))?
            }
            _ = token.cancelled() => {
                warn!("Response reading cancelled for {}", url);
                return Err(FetchError::Aborted { url });
            }
        };

        debug!("Fetched {} ({} chars)", url, text.len());
        Ok(text)
    }

    /// Convenience GET for a site-relative slug.
    pub async fn get(&self, slug: &str) -> Result<String, FetchError> {
        self.fetch(Method::GET, slug, None).await
    }

    fn url_for(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_succeeds_with_defaults() {
        let client = HttpClient::new("https://example.com", &HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn url_joins_base_and_slug() {
        let client =
            HttpClient::new("https://example.com/", &HttpClientConfig::default()).unwrap();
        assert_eq!(client.url_for("jobs/?page=1"), "https://example.com/jobs/?page=1");
    }

    #[tokio::test]
    async fn pre_cancelled_token_aborts_before_dispatch() {
        let client = HttpClient::new("https://example.com", &HttpClientConfig::default()).unwrap();
        let token = CancellationToken::new();
        token.cancel();

        let result = client
            .fetch_with_cancellation(Method::GET, "jobs/?page=1", None, &token)
            .await;
        assert!(matches!(result, Err(FetchError::Aborted { .. })));
    }

    #[tokio::test]
    async fn mid_flight_cancellation_aborts_request() {
        // Accept the connection but never respond, so the request stays
        // in flight until the token fires.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let client =
            HttpClient::new(format!("http://{addr}"), &HttpClientConfig::default()).unwrap();
        let token = CancellationToken::new();
        let cancel = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            cancel.cancel();
        });

        let result = client
            .fetch_with_cancellation(Method::GET, "jobs/?page=1", None, &token)
            .await;
        assert!(matches!(result, Err(FetchError::Aborted { .. })));

        server.abort();
    }

    #[test]
    fn error_display_names_the_condition() {
        let aborted = FetchError::Aborted {
            url: "https://example.com/jobs".to_string(),
        };
        assert!(aborted.to_string().contains("aborted"));

        let status = FetchError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "https://example.com/jobs".to_string(),
        };
        assert!(status.to_string().contains("500"));
    }
}
