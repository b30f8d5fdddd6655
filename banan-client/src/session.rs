//! Session store shared by every transport
//!
//! Holds the bearer token and the logged-in user. A 401 from the backend
//! clears it (forced logout) and raises the `expired` flag so the front end
//! can route back to the login page.

use std::sync::Arc;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;
use shared::client::UserInfo;
use tokio::sync::RwLock;

/// Claims the client reads from the JWT payload. The signature is not
/// verified here; the backend remains the authority.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub user_account_id: Option<String>,
    #[serde(default)]
    pub exp: Option<u64>,
}

impl TokenClaims {
    /// Decode the payload segment of a JWT (`header.payload.signature`)
    pub fn decode(token: &str) -> Option<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return None;
        }
        let payload = URL_SAFE_NO_PAD.decode(parts[1].trim_end_matches('=')).ok()?;
        serde_json::from_slice(&payload).ok()
    }
}

/// Session data kept in memory for the client's lifetime
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    token: Option<String>,
    user: Option<UserInfo>,
    expired: bool,
}

impl SessionData {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// Role from the token claims, falling back to the login response
    pub fn role(&self) -> Option<String> {
        self.claims()
            .and_then(|c| c.role)
            .or_else(|| self.user.as_ref().map(|u| u.role.clone()))
            .filter(|r| !r.is_empty())
    }

    /// User id from the token claims, falling back to the login response
    pub fn user_id(&self) -> Option<String> {
        self.claims()
            .and_then(|c| c.user_account_id)
            .or_else(|| self.user.as_ref().map(|u| u.id.clone()))
    }

    pub fn claims(&self) -> Option<TokenClaims> {
        self.token.as_deref().and_then(TokenClaims::decode)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Set by a 401; cleared by the next login
    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

/// Cloneable handle to the session data
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionData>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session restored from a saved token
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionData {
                token,
                ..SessionData::default()
            })),
        }
    }

    pub async fn snapshot(&self) -> SessionData {
        self.inner.read().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    pub async fn role(&self) -> Option<String> {
        self.inner.read().await.role()
    }

    pub async fn is_expired(&self) -> bool {
        self.inner.read().await.expired
    }

    /// Store credentials after a successful login
    pub async fn set_login(&self, token: String, user: UserInfo) {
        let mut guard = self.inner.write().await;
        guard.token = Some(token);
        guard.user = Some(user);
        guard.expired = false;
    }

    /// Clear credentials on logout
    pub async fn clear(&self) {
        let mut guard = self.inner.write().await;
        guard.token = None;
        guard.user = None;
    }

    /// Clear credentials after the backend rejected the token
    pub async fn expire(&self) {
        let mut guard = self.inner.write().await;
        if guard.token.is_some() {
            tracing::warn!("Session token rejected by backend, forcing logout");
        }
        guard.token = None;
        guard.user = None;
        guard.expired = true;
    }
}
