//! Client configuration and target-site constants.

use serde::{Deserialize, Serialize};

use crate::infrastructure::http_client::HttpClientConfig;

/// HireWire site URLs and routing constants
pub mod site {
    /// Base URL for the HireWire site
    pub const BASE_URL: &str = "https://www.hirewire.io";

    /// Path prefix for job listing pages; compiled filter segments are
    /// appended after it
    pub const JOBS_PATH: &str = "jobs";
}

/// Default client settings
pub mod defaults {
    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    /// Default user agent string
    pub const USER_AGENT: &str = "hirewire-rs/0.2 (+https://github.com/hirewire/hirewire-rs)";
}

/// Complete client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the target site; also the prefix of every
    /// `application_link` in extracted records.
    pub base_url: String,

    /// Transport settings passed to the HTTP client.
    pub http: HttpClientConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: site::BASE_URL.to_string(),
            http: HttpClientConfig::default(),
        }
    }
}
