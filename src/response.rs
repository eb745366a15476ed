//! Transport-agnostic response records.
//!
//! Every outcome of the router is turned into a [`ResponseRecord`] by a
//! [`ResponseBuilder`], so status, headers and bodies are formatted the same
//! way on every branch. Front doors serialise the record verbatim: the HTTP
//! server through [`IntoResponse`], the proxy-event adapter through serde.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use base64::Engine as _;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{error, info};

pub const CONTENT_TYPE_HTML: &str = "text/html";
pub const CONTENT_TYPE_JSON: &str = "application/json";

const BAD_REQUEST_PAGE: &str = "<html><head><title>400 - Bad Request</title></head><body><center><h1>400 - Bad Request</h1></center></body></html>";
const NOT_FOUND_PAGE: &str = "<html><head><title>404 - Page Not Found</title></head><body><center><h1>404 - Page Not Found</h1></center></body></html>";
const METHOD_NOT_ALLOWED_PAGE: &str = "<html><head><title>405 - Method Not Allowed</title></head><body><center><h1>405 - Method Not Allowed</h1></center></body></html>";
const INTERNAL_ERROR_PAGE: &str = "<html><head><title>500 - Internal Server Error</title></head><body><center><h1>500 - Internal Server Error</h1></center></body></html>";

/// Response header map. Ordering is irrelevant to clients; a `BTreeMap`
/// keeps serialised output stable.
pub type Headers = BTreeMap<String, String>;

/// Outcome of one invocation, ready to be serialised by a front door.
///
/// Serialises to the proxy response envelope:
///
/// ```json
/// {
///   "statusCode": 301,
///   "headers": { "Content-Type": "text/html", "Location": "https://example.com" }
/// }
/// ```
///
/// `body` and `isBase64Encoded` are either both present or both absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_base64_encoded: Option<bool>,
}

impl ResponseRecord {
    /// Returns a header value, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Builds a [`ResponseRecord`].
///
/// Pure and deterministic: headers are copied verbatim if given, the body and
/// the binary flag are set only when a body is given.
pub fn build(
    status_code: u16,
    headers: Option<Headers>,
    body: Option<String>,
    binary_body: bool,
) -> ResponseRecord {
    let is_base64_encoded = body.as_ref().map(|_| binary_body);

    ResponseRecord {
        status_code,
        headers,
        body,
        is_base64_encoded,
    }
}

fn html_headers() -> Headers {
    Headers::from([("Content-Type".to_string(), CONTENT_TYPE_HTML.to_string())])
}

/// The single choke point every router outcome passes through.
///
/// Wraps [`build`] and logs each record when response logging is enabled.
#[derive(Debug, Clone, Copy)]
pub struct ResponseBuilder {
    log_responses: bool,
}

impl ResponseBuilder {
    /// Creates a builder; `log_responses` mirrors `LOG_RESPONSES`.
    pub fn new(log_responses: bool) -> Self {
        Self { log_responses }
    }

    pub fn log_responses(&self) -> bool {
        self.log_responses
    }

    /// Builds a record and reports it to the log sink.
    pub fn build(
        &self,
        status_code: u16,
        headers: Option<Headers>,
        body: Option<String>,
        binary_body: bool,
    ) -> ResponseRecord {
        let record = build(status_code, headers, body, binary_body);

        if self.log_responses {
            match serde_json::to_string(&record) {
                Ok(json) => info!(status = record.status_code, "Response: {}", json),
                Err(e) => error!("Failed to serialize response: {}", e),
            }
        }

        record
    }

    /// 200 with a JSON body.
    pub fn json<T: Serialize>(&self, value: &T) -> ResponseRecord {
        match serde_json::to_string(value) {
            Ok(body) => self.build(
                200,
                Some(Headers::from([(
                    "Content-Type".to_string(),
                    CONTENT_TYPE_JSON.to_string(),
                )])),
                Some(body),
                false,
            ),
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                self.internal_error()
            }
        }
    }

    /// 301 Moved Permanently to `location`, without a body.
    pub fn redirect(&self, location: &str) -> ResponseRecord {
        let mut headers = html_headers();
        headers.insert("Location".to_string(), location.to_string());
        self.build(301, Some(headers), None, false)
    }

    pub fn bad_request(&self) -> ResponseRecord {
        self.build(400, Some(html_headers()), Some(BAD_REQUEST_PAGE.to_string()), false)
    }

    pub fn not_found(&self) -> ResponseRecord {
        self.build(404, Some(html_headers()), Some(NOT_FOUND_PAGE.to_string()), false)
    }

    pub fn method_not_allowed(&self) -> ResponseRecord {
        self.build(
            405,
            Some(html_headers()),
            Some(METHOD_NOT_ALLOWED_PAGE.to_string()),
            false,
        )
    }

    pub fn internal_error(&self) -> ResponseRecord {
        self.build(
            500,
            Some(html_headers()),
            Some(INTERNAL_ERROR_PAGE.to_string()),
            false,
        )
    }

    /// Canned page for an error status class.
    pub fn for_status(&self, status_code: u16) -> ResponseRecord {
        match status_code {
            400 => self.bad_request(),
            404 => self.not_found(),
            405 => self.method_not_allowed(),
            _ => self.internal_error(),
        }
    }
}

/// Canned 500 used when a record cannot be turned into an HTTP response.
fn internal_error_response() -> Response {
    let mut response = Response::new(Body::from(INTERNAL_ERROR_PAGE));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        axum::http::header::CONTENT_TYPE,
        HeaderValue::from_static(CONTENT_TYPE_HTML),
    );
    response
}

impl IntoResponse for ResponseRecord {
    fn into_response(self) -> Response {
        let Ok(status) = StatusCode::from_u16(self.status_code) else {
            error!("Invalid status code in response: {}", self.status_code);
            return internal_error_response();
        };

        let body = match (self.body, self.is_base64_encoded) {
            (None, _) => Body::empty(),
            (Some(body), Some(true)) => {
                match base64::engine::general_purpose::STANDARD.decode(body) {
                    Ok(bytes) => Body::from(bytes),
                    Err(e) => {
                        error!("Failed to decode base64 response body: {}", e);
                        return internal_error_response();
                    }
                }
            }
            (Some(body), _) => Body::from(body),
        };

        let mut response = Response::new(body);
        *response.status_mut() = status;

        for (name, value) in self.headers.unwrap_or_default() {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => {
                    error!("Invalid response header: {}", name);
                    return internal_error_response();
                }
            }
        }

        response
    }
}
