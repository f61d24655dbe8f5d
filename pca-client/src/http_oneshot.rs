//! Oneshot HTTP transport (in-process)
//!
//! Uses Tower's oneshot mode to call an axum `Router` directly, with
//! zero network overhead. Suited to same-process server/client wiring
//! and to the integration tests. Requires the "in-process" feature.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpTransport;

/// In-process transport over an axum `Router`.
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// Create a transport over an already-initialized router
    /// (`with_state` already applied).
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(Body::from(body.unwrap_or_default()))
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {e}")))
    }

    async fn execute(&self, request: Request<Body>) -> ClientResult<(StatusCode, Vec<u8>)> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {e}")))?;

        Ok((status, bytes.to_vec()))
    }

    async fn execute_json(&self, request: Request<Body>) -> ClientResult<Value> {
        let (status, bytes) = self.execute(request).await?;

        if !status.is_success() {
            return Err(ClientError::from_status(
                status.as_u16(),
                status.canonical_reason(),
            ));
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl HttpTransport for OneshotHttpClient {
    async fn get_json(&self, path: &str) -> ClientResult<Value> {
        let request = self.build_request(Method::GET, path, None)?;
        self.execute_json(request).await
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, path, Some(bytes))?;
        self.execute_json(request).await
    }

    async fn probe(&self, path: &str) -> ClientResult<u16> {
        let request = self.build_request(Method::GET, path, None)?;
        let (status, _body) = self.execute(request).await?;
        Ok(status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_router_yields_not_found() {
        let client = OneshotHttpClient::new(Router::new());

        match client.get_json("/api/anything").await {
            Err(ClientError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
