//! Error types for the store, the allocator and request routing.
//!
//! Every variant maps onto exactly one response class, so the router can
//! match them exhaustively instead of guessing from error text.

use std::time::Duration;

/// Failure talking to the backing key-value store.
///
/// A collision on conditional insert is *not* a `StoreError`; it is reported
/// as [`crate::domain::repositories::CreateOutcome::AlreadyExists`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Failure to allocate an identifier for a URL.
#[derive(Debug, thiserror::Error)]
pub enum AllocateError {
    #[error("no free identifier after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a request that did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("link not found: {0}")]
    NotFound(String),

    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error(transparent)]
    Allocate(#[from] AllocateError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status class of the outcome.
    ///
    /// `InvalidPath` and `NotFound` deliberately share 404.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidUrl(_) => 400,
            Self::InvalidPath(_) | Self::NotFound(_) => 404,
            Self::MethodNotAllowed(_) => 405,
            Self::Allocate(_) | Self::Store(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns true for failures caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
