//! HTTP client for the FoodData Central API.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::error::{UpstreamError, UpstreamResult};
use super::request::UpstreamRequest;
use crate::core::config::UpstreamConfig;

/// Longest upstream error body echoed back in error messages.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Client for the FoodData Central REST API.
///
/// Holds no per-call state; clones share the underlying connection pool.
#[derive(Clone)]
pub struct FdcClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for FdcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FdcClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl FdcClient {
    /// Create a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let http = Client::builder().build().map_err(UpstreamError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Build the full request URL, including the API key.
    pub fn build_url(&self, request: &UpstreamRequest) -> UpstreamResult<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| UpstreamError::Url(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(&request.segments);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            for (name, value) in request.query.iter() {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    /// Perform one GET and return the JSON body untouched.
    ///
    /// Network failures, non-2xx statuses and malformed bodies all surface as
    /// an [`UpstreamError`]. Nothing is retried.
    pub async fn get(&self, request: &UpstreamRequest) -> UpstreamResult<Value> {
        let path = request.path();
        let url = self.build_url(request)?;
        debug!(path = %path, params = request.query.len(), "GET upstream");

        // without_url() keeps the API key out of error messages
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| UpstreamError::Request {
                path: path.clone(),
                source: source.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            warn!(path = %path, status = status.as_u16(), "Upstream returned an error status");
            return Err(UpstreamError::status(path, status.as_u16(), body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| UpstreamError::Decode {
                path,
                source: source.without_url(),
            })
    }
}
