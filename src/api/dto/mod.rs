//! Data Transfer Objects for requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod proxy_event;
pub mod shorten;
