//! Transport-independent view of one inbound request.

use std::fmt;

/// Classified request method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMethod {
    /// Resolve an identifier (`GET`).
    Read,
    /// Allocate an identifier for a URL (`POST`).
    Write,
    /// Anything else; the original method token is kept for logging.
    Other(String),
}

impl RequestMethod {
    /// Classifies an HTTP method token.
    ///
    /// Method tokens are case-sensitive, so `get` is [`RequestMethod::Other`].
    pub fn classify(method: &str) -> Self {
        match method {
            "GET" => Self::Read,
            "POST" => Self::Write,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("GET"),
            Self::Write => f.write_str("POST"),
            Self::Other(method) => f.write_str(method),
        }
    }
}

/// A request as seen by the router.
///
/// Built by a front door, consumed once by
/// [`crate::application::services::RequestRouter::handle`].
#[derive(Debug, Clone)]
pub struct RoutedRequest {
    pub method: RequestMethod,
    /// Request path; only meaningful for reads.
    pub path: String,
    /// URL submitted for shortening; only meaningful for writes.
    pub payload_url: Option<String>,
    /// Identifier used to correlate log lines of one invocation.
    pub request_id: String,
}

impl RoutedRequest {
    pub fn new(
        method: RequestMethod,
        path: impl Into<String>,
        payload_url: Option<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            payload_url,
            request_id: request_id.into(),
        }
    }
}
