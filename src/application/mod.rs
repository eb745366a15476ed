//! Application layer services implementing the request flow.
//!
//! Services consume the [`crate::domain::repositories::LinkStore`] trait and
//! provide a transport-independent API for the front doors.
//!
//! # Available Services
//!
//! - [`services::link_allocator::LinkAllocator`] - Identifier allocation with bounded retry
//! - [`services::request_router::RequestRouter`] - Validation, dispatch and response mapping

pub mod services;
