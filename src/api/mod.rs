//! HTTP front door.
//!
//! Translates HTTP requests and proxy events into
//! [`crate::domain::entities::RoutedRequest`]s; the resulting
//! [`crate::response::ResponseRecord`]s are written back verbatim.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies and the proxy event envelope
//! - [`handlers`] - The catch-all gateway handler
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
