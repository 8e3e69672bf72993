use std::time::Duration;

use futures::StreamExt;
use url::Url;

use super::{ApiError, FeedPayload, ListParams, NewsApi};
use crate::config::Config;

const MAX_RESPONSE_SIZE: usize = 5 * 1024 * 1024; // 5MB

const LIST_PATH: &str = "news/list";

/// [`NewsApi`] backed by the news HTTP backend.
///
/// One request per fetch, no retries: a failed fetch leaves the store
/// unchanged and the caller decides whether to try again.
#[derive(Debug, Clone)]
pub struct HttpNewsApi {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpNewsApi {
    /// Build a client for `base_url` with its own connection pool.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;
        Self::with_client(client, base_url, timeout)
    }

    /// Build a client sharing an existing `reqwest::Client`.
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let endpoint = list_endpoint(base_url)?;
        tracing::debug!(endpoint = %endpoint, timeout_secs = timeout.as_secs(), "News API client ready");
        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Full request URL for `params`.
    pub fn request_url(&self, params: &ListParams) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(params.query_pairs());
        url
    }

    async fn fetch(&self, url: Url) -> Result<FeedPayload, ApiError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status().as_u16()));
        }

        let bytes = read_limited_bytes(response, MAX_RESPONSE_SIZE).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl NewsApi for HttpNewsApi {
    async fn fetch_news_feed(&self, params: &ListParams) -> Result<FeedPayload, ApiError> {
        let url = self.request_url(params);
        tracing::debug!(category = %params.category, change = params.change, "Fetching news list");

        let payload = tokio::time::timeout(self.timeout, self.fetch(url))
            .await
            .map_err(|_| ApiError::Timeout)??;

        tracing::debug!(
            category = %params.category,
            news = payload.news.len(),
            banner = payload.banner.len(),
            topic = payload.topic.as_ref().map_or(0, Vec::len),
            "News list received"
        );
        Ok(payload)
    }
}

/// Validate `base_url` and derive the list endpoint from it.
///
/// HTTPS is required; plain HTTP is accepted only for localhost test servers.
fn list_endpoint(base_url: &str) -> Result<Url, ApiError> {
    let base = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

    match base.scheme() {
        "https" => {}
        "http" => {
            let is_localhost = matches!(base.host_str(), Some("localhost") | Some("127.0.0.1"));
            if !is_localhost {
                tracing::error!(base_url = %base_url, "Rejecting non-HTTPS base URL (HTTPS required except for localhost)");
                return Err(ApiError::InsecureBaseUrl);
            }
            tracing::warn!(base_url = %base_url, "Using non-HTTPS news API base URL (localhost only)");
        }
        other => {
            return Err(ApiError::InvalidBaseUrl(format!("unsupported scheme: {other}")));
        }
    }

    if base.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
    }

    let joined = format!("{}/{}", base.as_str().trim_end_matches('/'), LIST_PATH);
    Url::parse(&joined).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))
}

async fn read_limited_bytes(response: reqwest::Response, limit: usize) -> Result<Vec<u8>, ApiError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(ApiError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(ApiError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
