//! Mock CRM API client for testing
//!
//! Records every request and answers from per-endpoint canned replies, so the
//! seeding sequence can be exercised without a network.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{ApiResponse, CrmApi, Endpoint};
use crate::error::{ApiError, Result};

/// Canned reply for an endpoint
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 response with this JSON body
    Json(Value),
    /// Response with the given status and JSON body
    Status(u16, Value),
    /// 200 response with an empty body
    Empty,
    /// Transport-level failure
    NetworkError,
    /// 500 response with a plain-text body
    ServerError(String),
    /// 200 response whose body is not JSON
    Garbage,
}

/// A request captured by the mock
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub endpoint: Endpoint,
    pub body: Value,
}

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockCrmClient::new()
///     .with_reply(Endpoint::Companies, MockReply::Json(json!({"company": {"id": "org-1"}})));
/// ```
#[derive(Default)]
pub struct MockCrmClient {
    replies: HashMap<Endpoint, MockReply>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockCrmClient {
    /// Create a mock that answers every endpoint with an empty body
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reply for an endpoint
    pub fn with_reply(mut self, endpoint: Endpoint, reply: MockReply) -> Self {
        self.replies.insert(endpoint, reply);
        self
    }

    /// All captured requests, in issue order
    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().await.clone()
    }

    /// Captured requests for one endpoint
    pub async fn requests_to(&self, endpoint: Endpoint) -> Vec<CapturedRequest> {
        self.captured
            .lock()
            .await
            .iter()
            .filter(|r| r.endpoint == endpoint)
            .cloned()
            .collect()
    }

    /// Total number of requests issued so far
    pub async fn request_count(&self) -> usize {
        self.captured.lock().await.len()
    }
}

#[async_trait]
impl CrmApi for MockCrmClient {
    async fn post(&self, endpoint: Endpoint, body: &Value) -> Result<ApiResponse> {
        self.captured.lock().await.push(CapturedRequest {
            endpoint,
            body: body.clone(),
        });

        let response = match self.replies.get(&endpoint).cloned().unwrap_or(MockReply::Empty) {
            MockReply::Json(value) => ApiResponse::new(StatusCode::OK, value.to_string()),
            MockReply::Status(code, value) => ApiResponse::new(
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                value.to_string(),
            ),
            MockReply::Empty => ApiResponse::new(StatusCode::OK, ""),
            MockReply::NetworkError => {
                return Err(ApiError::Network("Failed to connect to API".to_string()).into());
            }
            MockReply::ServerError(msg) => ApiResponse::new(StatusCode::INTERNAL_SERVER_ERROR, msg),
            MockReply::Garbage => ApiResponse::new(StatusCode::OK, "<html>oops</html>"),
        };
        Ok(response)
    }
}
