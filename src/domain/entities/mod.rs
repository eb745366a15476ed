//! Core domain entities.
//!
//! - [`LinkRecord`] - The persisted identifier to URL mapping
//! - [`RoutedRequest`] - One classified inbound request

pub mod link;
pub mod request;

pub use link::LinkRecord;
pub use request::{RequestMethod, RoutedRequest};
