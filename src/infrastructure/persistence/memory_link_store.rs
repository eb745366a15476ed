//! In-process link store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::{CreateOutcome, LinkStore};
use crate::error::StoreError;

/// Link store backed by a map in process memory.
///
/// Insert-if-absent runs entirely under the write lock, so it is atomic for
/// every task sharing the instance. Contents are lost on restart; intended
/// for development and tests.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: RwLock<HashMap<String, String>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn lookup(&self, id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.links.read().await.get(id).cloned())
    }

    async fn create_if_absent(&self, record: &LinkRecord) -> Result<CreateOutcome, StoreError> {
        match self.links.write().await.entry(record.id.clone()) {
            Entry::Occupied(_) => Ok(CreateOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(record.url.clone());
                Ok(CreateOutcome::Created)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_then_lookup() {
        let store = MemoryLinkStore::new();
        let record = LinkRecord::new("aB3dE5g", "https://example.com");

        assert_eq!(
            store.create_if_absent(&record).await.unwrap(),
            CreateOutcome::Created
        );
        assert_eq!(
            store.lookup("aB3dE5g").await.unwrap().as_deref(),
            Some("https://example.com")
        );
    }

    #[tokio::test]
    async fn test_lookup_missing() {
        let store = MemoryLinkStore::new();
        assert!(store.lookup("nothere").await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_first_writer_wins() {
        let store = MemoryLinkStore::new();

        store
            .create_if_absent(&LinkRecord::new("aB3dE5g", "https://first.com"))
            .await
            .unwrap();
        let second = store
            .create_if_absent(&LinkRecord::new("aB3dE5g", "https://second.com"))
            .await
            .unwrap();

        assert_eq!(second, CreateOutcome::AlreadyExists);
        assert_eq!(
            store.lookup("aB3dE5g").await.unwrap().as_deref(),
            Some("https://first.com")
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_writers_same_id() {
        let store = Arc::new(MemoryLinkStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let record = LinkRecord::new("raceId1", format!("https://example.com/{i}"));
                    store.create_if_absent(&record).await.unwrap()
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap() == CreateOutcome::Created {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.len().await, 1);
    }
}
