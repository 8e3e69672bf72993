//! Scripted news API for tests and offline demos.
//!
//! Responses are queued up front and handed out in order, one per request.
//! Every request is recorded so callers can assert on what the store asked
//! for. Once the queue runs dry each further request fails with
//! [`ApiError::Unavailable`].

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::{ApiError, FeedPayload, ListParams, NewsApi};

#[derive(Debug, Clone, Default)]
pub struct ScriptedApi {
    responses: Arc<Mutex<VecDeque<Result<FeedPayload, ApiError>>>>,
    requests: Arc<Mutex<Vec<ListParams>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub async fn push_payload(&self, payload: FeedPayload) {
        self.responses.lock().await.push_back(Ok(payload));
    }

    /// Queue a failed response.
    pub async fn push_error(&self, error: ApiError) {
        self.responses.lock().await.push_back(Err(error));
    }

    /// Requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<ListParams> {
        self.requests.lock().await.clone()
    }

    /// Number of queued responses not yet consumed.
    pub async fn pending(&self) -> usize {
        self.responses.lock().await.len()
    }
}

impl NewsApi for ScriptedApi {
    async fn fetch_news_feed(&self, params: &ListParams) -> Result<FeedPayload, ApiError> {
        self.requests.lock().await.push(params.clone());
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Unavailable("no scripted response left".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedEntry;

    #[tokio::test]
    async fn test_responses_in_order() {
        let api = ScriptedApi::new();
        api.push_payload(FeedPayload {
            news: vec![FeedEntry::new("1")],
            ..FeedPayload::default()
        })
        .await;
        api.push_error(ApiError::HttpStatus(503)).await;

        let first = api.fetch_news_feed(&ListParams::refresh("remen")).await.unwrap();
        assert_eq!(first.news[0].nid, "1");

        let second = api.fetch_news_feed(&ListParams::more("remen")).await;
        assert!(matches!(second, Err(ApiError::HttpStatus(503))));

        let third = api.fetch_news_feed(&ListParams::more("remen")).await;
        assert!(matches!(third, Err(ApiError::Unavailable(_))));

        let requests = api.requests().await;
        assert_eq!(requests.len(), 3);
        assert!(requests[0].change);
        assert!(!requests[1].change);
        assert_eq!(api.pending().await, 0);
    }

    #[tokio::test]
    async fn test_clones_share_script() {
        let api = ScriptedApi::new();
        let handle = api.clone();
        handle.push_payload(FeedPayload::default()).await;

        assert!(api.fetch_news_feed(&ListParams::refresh("yule")).await.is_ok());
        assert_eq!(handle.requests().await[0].category, "yule");
    }
}
