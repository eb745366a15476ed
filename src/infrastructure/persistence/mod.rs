//! Link store implementations.
//!
//! # Stores
//!
//! - [`PgLinkStore`] - PostgreSQL table, `INSERT ... ON CONFLICT DO NOTHING`
//! - [`RedisLinkStore`] - Redis keys, `SET ... NX`
//! - [`MemoryLinkStore`] - In-process map for development and tests
//! - [`TimedLinkStore`] - Read-timeout decorator around any of the above

pub mod memory_link_store;
pub mod pg_link_store;
pub mod redis_link_store;
pub mod timed_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
pub use redis_link_store::RedisLinkStore;
pub use timed_link_store::TimedLinkStore;
