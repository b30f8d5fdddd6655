//! Authentication adapter
//!
//! Successful logins are written into the transport's `SessionStore`, so every
//! later call carries the bearer token.

use shared::ApiResponse;
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};

use super::{Ack, ack, data};
use crate::client::HttpClient;
use crate::error::ClientResult;

/// `/auth`
pub struct AuthApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> AuthApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn login(&self, account: &str, password: &str) -> ClientResult<UserInfo> {
        let request = LoginRequest {
            account: account.to_string(),
            password: password.to_string(),
        };
        let resp: ApiResponse<LoginResponse> = self.http.post("/auth/login", &request).await?;
        let login = data(resp, "Đăng nhập thất bại")?;

        tracing::info!(account = %login.user.account, role = %login.user.role, "Logged in");
        self.http
            .session()
            .set_login(login.token, login.user.clone())
            .await;
        Ok(login.user)
    }

    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        let resp: Ack = self.http.post("/auth/register", request).await?;
        ack(resp, "Đăng ký thất bại")?;
        Ok(())
    }

    /// Local credentials are cleared even when the backend call fails
    pub async fn logout(&self) {
        let result: ClientResult<Ack> = self.http.post_empty("/auth/logout").await;
        if let Err(e) = result {
            tracing::warn!(error = %e, "Logout request failed, clearing local session anyway");
        }
        self.http.session().clear().await;
    }
}
