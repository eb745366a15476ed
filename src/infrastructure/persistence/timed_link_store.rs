//! Timeout decorator for link stores.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::{CreateOutcome, LinkStore};
use crate::error::StoreError;

/// Bounds every call to the wrapped store by a read timeout.
///
/// A slow or unreachable backend surfaces as [`StoreError::Timeout`] instead
/// of holding the invocation open.
///
/// Dropping the call does not undo work the backend already committed: an
/// insert that lands just before the deadline stays stored although the
/// caller sees a timeout. Such a record is never handed out, so it is only
/// dead weight. [`super::PgLinkStore::connect`] narrows the window with a
/// server-side `statement_timeout` below the read timeout.
pub struct TimedLinkStore<S> {
    inner: S,
    read_timeout: Duration,
}

impl<S: LinkStore> TimedLinkStore<S> {
    pub fn new(inner: S, read_timeout: Duration) -> Self {
        Self {
            inner,
            read_timeout,
        }
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        timeout(self.read_timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.read_timeout))?
    }
}

#[async_trait]
impl<S: LinkStore> LinkStore for TimedLinkStore<S> {
    async fn lookup(&self, id: &str) -> Result<Option<String>, StoreError> {
        self.bounded(self.inner.lookup(id)).await
    }

    async fn create_if_absent(&self, record: &LinkRecord) -> Result<CreateOutcome, StoreError> {
        self.bounded(self.inner.create_if_absent(record)).await
    }
}
