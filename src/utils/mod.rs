//! Utility functions for identifier generation and request validation.
//!
//! - [`id_generator`] - Random fixed-length identifiers
//! - [`link_path`] - Identifier extraction from read paths
//! - [`url_validation`] - Scheme check for submitted URLs
//! - [`request_id`] - Request ids for log correlation

pub mod id_generator;
pub mod link_path;
pub mod request_id;
pub mod url_validation;
