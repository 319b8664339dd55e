//! CRM API client

use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

pub mod crm;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use crm::CrmClient;
#[cfg(test)]
pub use mock::{MockCrmClient, MockReply};

/// Collection endpoints the seeder writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Companies,
    Contacts,
    Deals,
}

impl Endpoint {
    /// Path segment appended to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Companies => "companies",
            Endpoint::Contacts => "contacts",
            Endpoint::Deals => "deals",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Status and raw body of a create call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub text: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    /// Parse the body as JSON regardless of status.
    ///
    /// An empty body yields an empty object.
    pub fn json(&self) -> Result<Value> {
        if self.text.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        let value = serde_json::from_str(&self.text)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        Ok(value)
    }

    /// Turn a non-2xx status into an error
    pub fn error_for_status(self) -> Result<Self> {
        let status = self.status;
        if status.is_success() {
            return Ok(self);
        }

        let detail = format!("{}: {}", status, self.text);
        let err = if status.is_client_error() {
            ApiError::BadRequest(detail)
        } else if status.is_server_error() {
            ApiError::ServerError(detail)
        } else {
            ApiError::InvalidResponse(format!("Unexpected status {}", status))
        };
        Err(err.into())
    }
}

/// CRM API client trait
#[async_trait]
pub trait CrmApi: Send + Sync {
    /// Create a record by posting `body` as JSON to `endpoint`.
    ///
    /// Only transport failures are errors; the status is returned untouched
    /// and callers decide what it means.
    async fn post(&self, endpoint: Endpoint, body: &Value) -> Result<ApiResponse>;
}
