#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use short_link::application::services::{AllocationPolicy, RequestRouter};
use short_link::domain::entities::LinkRecord;
use short_link::domain::repositories::{CreateOutcome, LinkStore};
use short_link::error::StoreError;
use short_link::infrastructure::persistence::MemoryLinkStore;
use short_link::response::ResponseBuilder;
use short_link::routes::app_router;
use short_link::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn create_test_router(
    store: Arc<dyn LinkStore>,
    policy: AllocationPolicy,
) -> Arc<RequestRouter> {
    Arc::new(RequestRouter::new(store, policy, ResponseBuilder::new(false)))
}

pub fn create_test_state(store: Arc<dyn LinkStore>) -> AppState {
    AppState::new(create_test_router(store, AllocationPolicy::default()))
}

pub fn create_test_server(store: Arc<dyn LinkStore>) -> TestServer {
    TestServer::new(app_router(create_test_state(store))).unwrap()
}

/// Server backed by a fresh in-memory store; the store is returned for inspection.
pub fn memory_server() -> (TestServer, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    (create_test_server(store.clone()), store)
}

pub async fn seed_link(store: &MemoryLinkStore, id: &str, url: &str) {
    let outcome = store
        .create_if_absent(&LinkRecord::new(id, url))
        .await
        .unwrap();
    assert_eq!(outcome, CreateOutcome::Created);
}

/// Every call fails as if the backend were down.
pub struct FailingStore;

#[async_trait]
impl LinkStore for FailingStore {
    async fn lookup(&self, _id: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn create_if_absent(&self, _record: &LinkRecord) -> Result<CreateOutcome, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Every identifier is already taken; counts the attempts.
#[derive(Default)]
pub struct FullStore {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl LinkStore for FullStore {
    async fn lookup(&self, _id: &str) -> Result<Option<String>, StoreError> {
        Ok(Some("https://taken.example.com".to_string()))
    }

    async fn create_if_absent(&self, _record: &LinkRecord) -> Result<CreateOutcome, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Ok(CreateOutcome::AlreadyExists)
    }
}

/// Panics inside the store call.
pub struct PanickingStore;

#[async_trait]
impl LinkStore for PanickingStore {
    async fn lookup(&self, _id: &str) -> Result<Option<String>, StoreError> {
        panic!("lookup exploded");
    }

    async fn create_if_absent(&self, _record: &LinkRecord) -> Result<CreateOutcome, StoreError> {
        panic!("create exploded");
    }
}

/// Never answers within a test's patience.
pub struct StalledStore;

#[async_trait]
impl LinkStore for StalledStore {
    async fn lookup(&self, _id: &str) -> Result<Option<String>, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(None)
    }

    async fn create_if_absent(&self, _record: &LinkRecord) -> Result<CreateOutcome, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(CreateOutcome::Created)
    }
}

/// Delays every call before delegating to an in-memory store.
pub struct SlowStore {
    pub inner: Arc<MemoryLinkStore>,
    pub delay: Duration,
}

#[async_trait]
impl LinkStore for SlowStore {
    async fn lookup(&self, id: &str) -> Result<Option<String>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.lookup(id).await
    }

    async fn create_if_absent(&self, record: &LinkRecord) -> Result<CreateOutcome, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.create_if_absent(record).await
    }
}
