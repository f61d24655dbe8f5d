//! HTTP transport layer
//!
//! Every higher-level method funnels through [`HttpTransport`]; this
//! is the sole network boundary of the client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Transport seam between the dashboard client and the backend.
///
/// `get_json`/`post_json` send JSON content-type/accept headers,
/// turn a non-2xx status into [`ClientError::Status`] and parse the
/// body as JSON with no schema validation. `probe` reports the raw
/// status code only and never reads the body.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get_json(&self, path: &str) -> ClientResult<Value>;

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<Value>;

    async fn probe(&self, path: &str) -> ClientResult<u16>;
}

/// Network transport over reqwest.
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    /// Create a transport from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response(response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

fn status_error(status: StatusCode) -> ClientError {
    ClientError::from_status(status.as_u16(), status.canonical_reason())
}

#[async_trait]
impl HttpTransport for NetworkHttpClient {
    async fn get_json(&self, path: &str) -> ClientResult<Value> {
        let response = self
            .client
            .get(self.url(path))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let response = self
            .client
            .post(self.url(path))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn probe(&self, path: &str) -> ClientResult<u16> {
        let response = self.client.get(self.url(path)).send().await?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://localhost:8080/");
        let client = NetworkHttpClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/orders"), "http://localhost:8080/api/orders");
    }

    #[test]
    fn test_status_error_carries_code_and_text() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR);
        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
