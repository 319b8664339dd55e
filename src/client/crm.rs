//! reqwest-backed CRM API client

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use serde_json::Value;

use super::{ApiResponse, CrmApi, Endpoint};
use crate::error::{ApiError, Result};

/// Default CRM API base URL
pub const DEFAULT_API_BASE: &str = "https://back.roilabs.com.br/api/crm";

/// CRM API client
pub struct CrmClient {
    http: HttpClient,
    base_url: String,
}

impl CrmClient {
    /// Create a client for the given base URL.
    ///
    /// Requests wait indefinitely unless a timeout is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl CrmApi for CrmClient {
    async fn post(&self, endpoint: Endpoint, body: &Value) -> Result<ApiResponse> {
        let url = self.url(endpoint);
        debug!("POST {} {}", url, body);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;
        debug!("POST {} -> {} ({} bytes)", url, status, text.len());

        Ok(ApiResponse::new(status, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::Matcher;
    use reqwest::StatusCode;
    use serde_json::json;

    fn client(base: &str) -> CrmClient {
        CrmClient::new(base, Some(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_url_joins_endpoint() {
        let c = client("http://localhost:8080/api/crm/");
        assert_eq!(c.url(Endpoint::Deals), "http://localhost:8080/api/crm/deals");

        let c = CrmClient::new("http://localhost:8080/api/crm", None).unwrap();
        assert_eq!(
            c.url(Endpoint::Companies),
            "http://localhost:8080/api/crm/companies"
        );
    }

    #[tokio::test]
    async fn test_post_sends_json_and_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/companies")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "name": "ACME" })))
            .with_status(201)
            .with_body(r#"{"company":{"id":"org-1"}}"#)
            .create_async()
            .await;

        let response = client(&server.url())
            .post(Endpoint::Companies, &json!({ "name": "ACME" }))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.json().unwrap()["company"]["id"], "org-1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_keeps_error_status_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/companies")
            .with_status(409)
            .with_body(r#"{"company":{"id":"org-1"},"error":"already exists"}"#)
            .create_async()
            .await;

        let response = client(&server.url())
            .post(Endpoint::Companies, &json!({}))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.json().unwrap()["company"]["id"], "org-1");
    }

    #[tokio::test]
    async fn test_post_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/deals")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let response = client(&server.url())
            .post(Endpoint::Deals, &json!({}))
            .await
            .unwrap();

        assert_eq!(response.json().unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_post_unreachable_host() {
        // Port 9 (discard) is closed on test hosts
        let err = client("http://127.0.0.1:9")
            .post(Endpoint::Companies, &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Network(_))));
    }
}
