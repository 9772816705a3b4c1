//! Yahoo Finance HTTP client.

use crate::error::{DataError, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Yahoo Finance API base URL
const YAHOO_BASE_URL: &str = "https://query2.finance.yahoo.com";

/// User agent for Yahoo Finance requests
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

/// Request timeout applied at client construction
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Yahoo Finance API client.
///
/// One shared `reqwest` client with a browser user agent and a fixed
/// timeout. There is no caching, no retry, and no rate limiting: the
/// report generator issues four sequential requests per run.
pub struct YahooClient {
    client: reqwest::Client,
    base_url: String,
}

impl YahooClient {
    /// Create a new Yahoo Finance client.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Network`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            base_url: YAHOO_BASE_URL.to_string(),
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a URL and deserialize the JSON response body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(DataError::Network)?;

        if !response.status().is_success() {
            return Err(DataError::YahooApi(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DataError::Parse(format!("Failed to parse response from {}: {}", url, e)))
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new().expect("Failed to create Yahoo Finance client")
    }
}

impl std::fmt::Debug for YahooClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
