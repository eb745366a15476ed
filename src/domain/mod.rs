//! Domain layer containing the link model and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Link records and routed requests
//! - [`repositories`] - The [`repositories::LinkStore`] trait implemented by
//!   every storage backend
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Backends live in [`crate::infrastructure::persistence`], request
//! handling in [`crate::application::services`].

pub mod entities;
pub mod repositories;
