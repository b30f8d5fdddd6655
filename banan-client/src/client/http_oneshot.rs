// banan-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory transport
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;

use super::http::{HttpClient, error_from_status};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives an axum `Router` directly through tower's `oneshot`, so a backend
/// implemented in the same process can be exercised with zero network
/// overhead. Paths are handed to the router as-is.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use banan_client::OneshotHttpClient;
///
/// let router: Router = build_backend();
/// let client = OneshotHttpClient::new(router);
/// let tables: ApiResponse<Vec<RestaurantTable>> = client.get("/tables").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    session: SessionStore,
}

impl OneshotHttpClient {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            session: SessionStore::new(),
        }
    }

    /// Share an existing session store
    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = session;
        self
    }

    async fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = self.session.token().await {
            builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let body = match body {
            Some(bytes) => {
                builder = builder.header(http::header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(error_from_status(&self.session, status, text).await);
        }

        serde_json::from_slice(&body_bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<T> {
        let request = self.build_request(method, path, body).await?;
        self.execute(request).await
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.call(Method::GET, path, None).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        self.call(Method::POST, path, Some(bytes)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.call(Method::POST, path, None).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        self.call(Method::PUT, path, Some(bytes)).await
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.call(Method::PUT, path, None).await
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        self.call(Method::PATCH, path, Some(bytes)).await
    }

    async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.call(Method::PATCH, path, None).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.call(Method::DELETE, path, None).await
    }

    fn session(&self) -> &SessionStore {
        &self.session
    }
}
