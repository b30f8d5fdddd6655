//! Client module - transports
//!
//! `HttpClient` is the seam every API adapter is written against. The network
//! implementation talks to the backend over reqwest; the oneshot implementation
//! drives an in-process axum router (feature "in-process").

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

// Re-export main types
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
