//! Cancellation scopes for the table view
//!
//! Each visit of a table view owns a `CancellationToken`. Entering another
//! table or returning to the grid cancels the token of the previous visit, so
//! responses that arrive afterwards are dropped instead of overwriting state.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use banan_client::ClientResult;
use tokio_util::sync::CancellationToken;

use crate::error::{PosError, PosResult};

/// Owner of the current view token
#[derive(Debug, Clone, Default)]
pub struct ViewTracker {
    current: Arc<Mutex<CancellationToken>>,
}

impl ViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the previous visit and start a new one
    pub fn enter(&self) -> CancellationToken {
        let mut guard = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        guard.cancel();
        *guard = CancellationToken::new();
        guard.clone()
    }

    /// Cancel the current visit without starting a new one
    pub fn leave(&self) {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel();
    }

    /// Token of the current visit
    pub fn token(&self) -> CancellationToken {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn handle(&self) -> NavigationHandle {
        NavigationHandle {
            tracker: self.clone(),
        }
    }
}

/// Lets another task leave the table view while one of its requests is in flight
#[derive(Debug, Clone)]
pub struct NavigationHandle {
    tracker: ViewTracker,
}

impl NavigationHandle {
    pub fn leave(&self) {
        tracing::debug!("Leaving table view");
        self.tracker.leave();
    }

    pub fn is_active(&self) -> bool {
        !self.tracker.token().is_cancelled()
    }
}

/// Run a backend call inside a view scope
pub async fn run_scoped<T, F>(token: &CancellationToken, call: F) -> PosResult<T>
where
    F: Future<Output = ClientResult<T>>,
{
    if token.is_cancelled() {
        return Err(PosError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(PosError::Cancelled),
        result = call => Ok(result?),
    }
}
