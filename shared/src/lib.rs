//! Shared types for the Bàn Ăn POS client
//!
//! Wire models exchanged with the restaurant backend, the `{code, message, data}`
//! response envelope, and the auth DTOs used by both the client crate and the
//! in-process test backends.

pub mod client;
pub mod models;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{API_CODE_SUCCESS, ApiResponse};
