//! ORCID public API client.
//!
//! Two unauthenticated JSON endpoints:
//! - `{base}/{orcid}/record`
//! - `{base}/{orcid}/work/{put-code}`
//!
//! No caching and no retries; callers decide how to treat failures.

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{OrcidId, PutCode};

/// ORCID public API client.
#[derive(Clone)]
pub struct OrcidClient {
    /// HTTP client.
    client: Client,

    /// API base URL.
    base_url: Url,
}

impl OrcidClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.api_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API URL cannot be used as a base: {}", config.api_url);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch the full public record for `orcid`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a non-JSON body.
    pub async fn fetch_record(&self, orcid: &OrcidId) -> ClientResult<Value> {
        let url = self.endpoint(&[orcid.as_str(), "record"]);
        self.get_json(url).await
    }

    /// Fetch the detailed document for one work.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a non-JSON body.
    pub async fn fetch_work(&self, orcid: &OrcidId, put_code: &PutCode) -> ClientResult<Value> {
        let url = self.endpoint(&[orcid.as_str(), "work", put_code.as_str()]);
        self.get_json(url).await
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Make a GET request and parse the body as JSON.
    async fn get_json(&self, url: Url) -> ClientResult<Value> {
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(url.clone()).send().await?;
        let response = Self::handle_response(response, &url)?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Map non-success status codes to errors.
    fn handle_response(response: reqwest::Response, url: &Url) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        tracing::debug!(url = %url, status = status.as_u16(), "Request failed");

        match status.as_u16() {
            404 => Err(ClientError::not_found(url.as_str())),
            code => Err(ClientError::status(code, url.as_str())),
        }
    }
}

impl std::fmt::Debug for OrcidClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrcidClient").field("base_url", &self.base_url.as_str()).finish()
    }
}
