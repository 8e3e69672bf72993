//! News API client interface and its implementations.
//!
//! The store only depends on [`NewsApi`]. [`HttpNewsApi`] talks to the real
//! backend; [`ScriptedApi`] replays canned responses for tests and demos.

mod http;
mod scripted;

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::feed::FeedEntry;

pub use http::HttpNewsApi;
pub use scripted::ScriptedApi;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request timed out")]
    Timeout,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Insecure base URL: HTTPS required (except localhost for testing)")]
    InsecureBaseUrl,
    #[error("News API unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Request / Response
// ============================================================================

/// Parameters of a news list request.
///
/// `category` and `change` are always sent; the pagination fields are passed
/// through to the backend only when set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListParams {
    /// Category key, e.g. `"remen"`.
    pub category: String,
    /// `true` replaces the current list, `false` appends to it.
    #[serde(default)]
    pub change: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ListParams {
    /// First page of `category`, replacing whatever list is shown.
    pub fn refresh(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            change: true,
            ..Self::default()
        }
    }

    /// Next page of `category`, appended to the current list.
    pub fn more(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            change: false,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Query string pairs in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("category", self.category.clone()),
            ("change", self.change.to_string()),
        ];
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        pairs
    }
}

/// Body of a successful news list response.
///
/// `news` and `banner` default to empty when missing or null; `topic` stays
/// `None` when the backend omits it. A malformed item is dropped on its own
/// and never fails the whole response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedPayload {
    #[serde(default, deserialize_with = "crate::feed::lenient_entries")]
    pub news: Vec<FeedEntry>,
    #[serde(default, deserialize_with = "crate::feed::lenient_entries")]
    pub banner: Vec<FeedEntry>,
    #[serde(
        default,
        deserialize_with = "crate::feed::lenient_optional_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub topic: Option<Vec<FeedEntry>>,
}

// ============================================================================
// Client Trait
// ============================================================================

/// Source of news lists.
pub trait NewsApi {
    fn fetch_news_feed(
        &self,
        params: &ListParams,
    ) -> impl Future<Output = Result<FeedPayload, ApiError>> + Send;
}
