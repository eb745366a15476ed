//! API-Gateway-style proxy request envelope.
//!
//! Lets a single JSON event be replayed through the router without an HTTP
//! server, e.g. by `admin invoke event.json`.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::entities::{RequestMethod, RoutedRequest};
use crate::utils::request_id::request_id_or_generate;

/// Header carrying the URL to shorten.
pub const URL_HEADER: &str = "URL";

/// Inbound proxy event.
///
/// ```json
/// {
///   "httpMethod": "POST",
///   "path": "/",
///   "headers": { "URL": "https://example.com/page" },
///   "requestContext": { "requestId": "c6af9ac6-7b61-11e6-9a41-93e8deadbeef" }
/// }
/// ```
///
/// Unknown fields are ignored. `headers` may be `null`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    pub http_method: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub request_context: Option<ProxyRequestContext>,
}

/// Per-request metadata supplied by the gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequestContext {
    #[serde(default)]
    pub request_id: Option<String>,
}

impl ProxyEvent {
    /// Returns a header value.
    ///
    /// An exact key match wins; otherwise the first case-insensitive match in
    /// key order is used, so duplicates in different case resolve the same
    /// way on every run.
    pub fn header(&self, name: &str) -> Option<&str> {
        let headers = self.headers.as_ref()?;

        headers
            .get(name)
            .or_else(|| {
                headers
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }

    /// Classifies the event into a [`RoutedRequest`].
    ///
    /// The path is taken from `path`, then `resource`, then defaults to `/`.
    pub fn into_routed_request(self) -> RoutedRequest {
        let payload_url = self.header(URL_HEADER).map(str::to_string);
        let request_id = request_id_or_generate(
            self.request_context
                .as_ref()
                .and_then(|ctx| ctx.request_id.as_deref()),
        );
        let path = self
            .path
            .or(self.resource)
            .unwrap_or_else(|| "/".to_string());

        RoutedRequest::new(
            RequestMethod::classify(&self.http_method),
            path,
            payload_url,
            request_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: serde_json::Value) -> ProxyEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_write_event() {
        let request = event(json!({
            "httpMethod": "POST",
            "path": "/",
            "headers": { "URL": "https://example.com/page" },
            "requestContext": { "requestId": "req-1" }
        }))
        .into_routed_request();

        assert_eq!(request.method, RequestMethod::Write);
        assert_eq!(request.payload_url.as_deref(), Some("https://example.com/page"));
        assert_eq!(request.request_id, "req-1");
    }

    #[test]
    fn test_url_header_is_case_insensitive() {
        let ev = event(json!({
            "httpMethod": "POST",
            "headers": { "url": "https://example.com" }
        }));

        assert_eq!(ev.header("URL"), Some("https://example.com"));
    }

    #[test]
    fn test_exact_url_header_wins_over_other_case() {
        for _ in 0..50 {
            let request = event(json!({
                "httpMethod": "POST",
                "headers": {
                    "url": "https://b.example",
                    "URL": "https://a.example"
                }
            }))
            .into_routed_request();

            assert_eq!(request.payload_url.as_deref(), Some("https://a.example"));
        }
    }

    #[test]
    fn test_mixed_case_duplicates_resolve_in_key_order() {
        let ev = event(json!({
            "httpMethod": "POST",
            "headers": { "url": "https://lower.example", "Url": "https://title.example" }
        }));

        assert_eq!(ev.header("URL"), Some("https://title.example"));
    }

    #[test]
    fn test_read_event_prefers_path_over_resource() {
        let request = event(json!({
            "httpMethod": "GET",
            "path": "/ab12cd9",
            "resource": "/{proxy+}"
        }))
        .into_routed_request();

        assert_eq!(request.method, RequestMethod::Read);
        assert_eq!(request.path, "/ab12cd9");
        assert!(request.payload_url.is_none());
    }

    #[test]
    fn test_resource_is_used_without_path() {
        let request = event(json!({
            "httpMethod": "GET",
            "resource": "/ab12cd9/"
        }))
        .into_routed_request();

        assert_eq!(request.path, "/ab12cd9/");
    }

    #[test]
    fn test_null_headers_and_missing_context() {
        let request = event(json!({
            "httpMethod": "DELETE",
            "headers": null
        }))
        .into_routed_request();

        assert_eq!(request.method, RequestMethod::Other("DELETE".to_string()));
        assert_eq!(request.path, "/");
        assert!(request.payload_url.is_none());
        assert_eq!(request.request_id.len(), 32);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let ev = event(json!({
            "httpMethod": "GET",
            "path": "/ab12cd9",
            "isBase64Encoded": false,
            "queryStringParameters": null,
            "stageVariables": { "stage": "prod" }
        }));

        assert_eq!(ev.http_method, "GET");
    }

    #[test]
    fn test_missing_method_is_rejected() {
        let result = serde_json::from_value::<ProxyEvent>(json!({ "path": "/" }));
        assert!(result.is_err());
    }
}
