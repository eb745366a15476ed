//! Redis implementation of the link store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, Value, aio::ConnectionManager};
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::{CreateOutcome, LinkStore};
use crate::error::StoreError;

/// Redis link store.
///
/// Each record is a plain string key `<namespace>:<id>` holding the URL.
/// Conditional insert is `SET key url NX`, which Redis executes atomically.
pub struct RedisLinkStore {
    conn: ConnectionManager,
    namespace: String,
}

impl RedisLinkStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the URL is invalid or the server
    /// rejects the connection, and [`StoreError::Timeout`] if connecting takes
    /// longer than `connect_timeout`.
    pub async fn connect(
        redis_url: &str,
        namespace: &str,
        connect_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)?;

        let manager = timeout(connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout(connect_timeout))??;

        let mut test_conn = manager.clone();
        timeout(connect_timeout, test_conn.ping::<()>())
            .await
            .map_err(|_| StoreError::Timeout(connect_timeout))??;

        info!("Connected to Redis");

        Ok(Self {
            conn: manager,
            namespace: namespace.to_string(),
        })
    }

    fn key(&self, id: &str) -> String {
        build_key(&self.namespace, id)
    }
}

fn build_key(namespace: &str, id: &str) -> String {
    format!("{namespace}:{id}")
}

#[async_trait]
impl LinkStore for RedisLinkStore {
    async fn lookup(&self, id: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.get::<_, Option<String>>(self.key(id)).await?)
    }

    async fn create_if_absent(&self, record: &LinkRecord) -> Result<CreateOutcome, StoreError> {
        let mut conn = self.conn.clone();

        let reply: Value = redis::cmd("SET")
            .arg(self.key(&record.id))
            .arg(&record.url)
            .arg("NX")
            .query_async(&mut conn)
            .await?;

        Ok(match reply {
            Value::Nil => CreateOutcome::AlreadyExists,
            _ => CreateOutcome::Created,
        })
    }
}
