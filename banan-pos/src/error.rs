//! POS error types
//!
//! Every failure a handler can observe. The controller turns them into
//! localized strings stored in its table- or dish-scoped error slot.

use banan_client::ClientError;
use thiserror::Error;

/// Message shown when the backend rejected the session token
pub const SESSION_EXPIRED_MESSAGE: &str = "Phiên đăng nhập đã hết hạn. Vui lòng đăng nhập lại.";

/// POS error type
#[derive(Debug, Error)]
pub enum PosError {
    /// Backend or transport failure
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Input rejected before any backend call; the message is user-facing
    #[error("{0}")]
    Validation(String),

    /// Entity missing from local state
    #[error("{0}")]
    NotFound(String),

    /// The view that issued the request was left before it completed
    #[error("Request cancelled")]
    Cancelled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (log directory, .env file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PosError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Client(ClientError::SessionExpired))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Localized message for the UI. `fallback` names the failed operation.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Client(ClientError::SessionExpired) => SESSION_EXPIRED_MESSAGE.to_string(),
            Self::Client(err) => match err.backend_message() {
                Some(detail) if detail != fallback => format!("{}: {}", fallback, detail),
                _ => fallback.to_string(),
            },
            _ => fallback.to_string(),
        }
    }
}

/// Which error slot of the table screen a failure lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// Grid level: loading or managing tables
    Table,
    /// Selected table: dishes, cart, payment
    Dish,
    /// Add-table form
    AddTable,
}

/// Result type for POS operations
pub type PosResult<T> = Result<T, PosError>;
