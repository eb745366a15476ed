//! Store trait for identifier to URL mappings.

use crate::domain::entities::LinkRecord;
use crate::error::StoreError;
use async_trait::async_trait;

/// Result of a conditional insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The record was written.
    Created,
    /// A record with the same id already exists; nothing was written.
    AlreadyExists,
}

/// Key-value store holding [`LinkRecord`]s with first-writer-wins semantics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::RedisLinkStore`] - Redis
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - in-process map
/// - [`crate::infrastructure::persistence::TimedLinkStore`] - timeout decorator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Looks up the URL stored under `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if no record exists
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    async fn lookup(&self, id: &str) -> Result<Option<String>, StoreError>;

    /// Inserts `record` only if no record exists under its id.
    ///
    /// Must be a single atomic operation against the backend: two concurrent
    /// calls for the same id never both return [`CreateOutcome::Created`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failures. A collision is not an error.
    async fn create_if_absent(&self, record: &LinkRecord) -> Result<CreateOutcome, StoreError>;
}
