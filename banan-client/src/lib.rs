//! Banan Client - HTTP client for the restaurant backend
//!
//! Provides the transport seam (`HttpClient`), a reqwest implementation, an
//! in-process implementation for tests (feature "in-process"), the session
//! store and one adapter per backend resource.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use api::RestaurantApi;
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{SessionData, SessionStore, TokenClaims};

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, LoginResponse, UserInfo};
