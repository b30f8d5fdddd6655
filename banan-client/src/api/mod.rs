//! Backend resource adapters
//!
//! Thin pass-through: each method issues exactly one HTTP call, unwraps the
//! `{code, message, data}` envelope and returns `data` or a `ClientError::Api`
//! carrying the backend message. No batching, no retry, no caching.

mod auth;
mod bookings;
mod invoices;
mod menu;
mod orders;
mod revenue;
mod reviews;
mod tables;

pub use auth::AuthApi;
pub use bookings::BookingsApi;
pub use invoices::InvoicesApi;
pub use menu::MenuApi;
pub use orders::OrdersApi;
pub use revenue::RevenueApi;
pub use reviews::ReviewsApi;
pub use tables::TablesApi;

use shared::ApiResponse;

use crate::client::HttpClient;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;

/// Envelope payload for calls whose `data` is ignored
pub(crate) type Ack = ApiResponse<serde_json::Value>;

/// Facade over every resource adapter, generic over the transport
#[derive(Debug, Clone)]
pub struct RestaurantApi<C> {
    http: C,
}

impl<C: HttpClient> RestaurantApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn session(&self) -> &SessionStore {
        self.http.session()
    }

    pub fn auth(&self) -> AuthApi<'_, C> {
        AuthApi::new(&self.http)
    }

    pub fn tables(&self) -> TablesApi<'_, C> {
        TablesApi::new(&self.http)
    }

    pub fn menu(&self) -> MenuApi<'_, C> {
        MenuApi::new(&self.http)
    }

    pub fn orders(&self) -> OrdersApi<'_, C> {
        OrdersApi::new(&self.http)
    }

    pub fn invoices(&self) -> InvoicesApi<'_, C> {
        InvoicesApi::new(&self.http)
    }

    pub fn revenue(&self) -> RevenueApi<'_, C> {
        RevenueApi::new(&self.http)
    }

    pub fn reviews(&self) -> ReviewsApi<'_, C> {
        ReviewsApi::new(&self.http)
    }

    pub fn bookings(&self) -> BookingsApi<'_, C> {
        BookingsApi::new(&self.http)
    }
}

/// Reject non-200 envelopes, substituting `fallback` for an empty message
pub(crate) fn check<T>(resp: ApiResponse<T>, fallback: &str) -> ClientResult<ApiResponse<T>> {
    if resp.is_success() {
        return Ok(resp);
    }
    let message = if resp.message.is_empty() {
        fallback.to_string()
    } else {
        resp.message
    };
    Err(ClientError::Api {
        code: resp.code,
        message,
    })
}

/// Required `data`
pub(crate) fn data<T>(resp: ApiResponse<T>, fallback: &str) -> ClientResult<T> {
    check(resp, fallback)?
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("{}: missing data", fallback)))
}

/// List `data`; a missing or null list is empty
pub(crate) fn list<T>(resp: ApiResponse<Vec<T>>, fallback: &str) -> ClientResult<Vec<T>> {
    Ok(check(resp, fallback)?.data.unwrap_or_default())
}

/// Success without payload; returns the backend message for logging
pub(crate) fn ack(resp: Ack, fallback: &str) -> ClientResult<String> {
    Ok(check(resp, fallback)?.message)
}

/// Append URL-encoded query parameters to a path
pub(crate) fn with_query(path: &str, params: &[(&str, &str)]) -> ClientResult<String> {
    let mut url = reqwest::Url::parse("http://query.local/")
        .map_err(|e| ClientError::Internal(e.to_string()))?;
    url.query_pairs_mut().extend_pairs(params);
    Ok(match url.query() {
        Some(query) if !query.is_empty() => format!("{}?{}", path, query),
        _ => path.to_string(),
    })
}
