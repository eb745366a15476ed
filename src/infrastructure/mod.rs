//! Infrastructure layer for external integrations.
//!
//! Implements the [`crate::domain::repositories::LinkStore`] contract on
//! concrete backends.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL, Redis and in-memory stores

pub mod persistence;
