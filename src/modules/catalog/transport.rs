use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

/// Query/update protocol to the external catalog.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Execute one RPC method and return its `result` member.
    async fn execute(&self, method: &str, params: Value) -> AppResult<Value>;
}

/// JSON-RPC 2.0 over HTTP, the media center's remote-control interface.
pub struct HttpCatalogTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCatalogTransport {
    pub fn new(endpoint: impl Into<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl CatalogTransport for HttpCatalogTransport {
    async fn execute(&self, method: &str, params: Value) -> AppResult<Value> {
        let envelope = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&envelope)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::CatalogError(format!(
                "{} returned HTTP {}",
                method,
                response.status()
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::CatalogError(format!("Unparseable {} response: {}", method, e))
        })?;

        if let Some(error) = body.get("error") {
            return Err(AppError::CatalogError(format!(
                "{} failed: {}",
                method, error
            )));
        }

        body.get("result")
            .cloned()
            .ok_or_else(|| AppError::CatalogError(format!("Empty response from {} call", method)))
    }
}
