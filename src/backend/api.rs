//! HTTP client for the search backend

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::{ContextResult, SearchResult};
use crate::config::Config;
use crate::error::ClientError;

pub const SEARCH_PATH: &str = "/search";
pub const CONTEXT_PATH: &str = "/search-context";

/// Client for the `/search` and `/search-context` endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    encode_query: bool,
}

impl BackendClient {
    pub fn new(base_url: &str, encode_query: bool) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            encode_query,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url, config.encode_query)
    }

    /// Build `{base}{path}?q={value}`.
    ///
    /// In compatibility mode the value is interpolated as-is and left to the
    /// URL parser, matching what the legacy page sent.
    pub fn endpoint_url(&self, path: &str, q: &str) -> String {
        if self.encode_query {
            format!("{}{}?q={}", self.base_url, path, urlencoding::encode(q))
        } else {
            format!("{}{}?q={}", self.base_url, path, q)
        }
    }

    /// Quotes matching `query`, in backend order
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        let url = self.endpoint_url(SEARCH_PATH, query);
        self.get_json(&url).await
    }

    /// Text surrounding `quote`; callers only look at the first entry
    pub async fn context(&self, quote: &str) -> Result<Vec<ContextResult>, ClientError> {
        let url = self.endpoint_url(CONTEXT_PATH, quote);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode(status, &body)
    }
}

/// Turn a raw response into `T`, treating non-2xx as an error
pub fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ClientError> {
    if !(200..300).contains(&status) {
        return Err(ClientError::Status {
            status,
            body: String::from_utf8_lossy(body).trim().to_string(),
        });
    }
    Ok(serde_json::from_slice(body)?)
}
