//! API Response types
//!
//! Every backend endpoint answers with the same envelope:
//! ```json
//! {
//!     "code": 200,
//!     "message": "Success",
//!     "data": { ... }
//! }
//! ```
//! `code == 200` is the only success value; anything else is a business error
//! carrying a human-readable `message`, regardless of the HTTP status it came with.

use serde::{Deserialize, Serialize};

/// Envelope code signalling success
pub const API_CODE_SUCCESS: i32 = 200;

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (200 = success, others = error codes)
    pub code: i32,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS,
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Whether the backend reported success
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }
}
