//! Catch-all handler feeding HTTP requests into the request router.

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::IntoResponse,
};

use crate::api::dto::proxy_event::URL_HEADER;
use crate::domain::entities::{RequestMethod, RoutedRequest};
use crate::state::AppState;
use crate::utils::request_id::request_id_or_generate;

/// Header a caller or proxy may use to pass its own request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Routes every method and path through [`crate::application::services::RequestRouter`].
///
/// # Endpoints
///
/// - `GET /{id}` or `GET /{id}/` - 301 redirect to the stored URL
/// - `POST /` with header `URL: <scheme>://...` - 200 `{"UrlId": "<id>"}`
/// - anything else - 400 / 404 / 405 canned pages
///
/// The router's [`crate::response::ResponseRecord`] is written back verbatim.
pub async fn gateway_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request = routed_request(&method, &uri, &headers);
    state.request_router.handle(request).await
}

/// Maps the parts of an HTTP request the router cares about.
///
/// Header values that are not valid UTF-8 are treated as absent.
pub fn routed_request(method: &Method, uri: &Uri, headers: &HeaderMap) -> RoutedRequest {
    let payload_url = headers
        .get(URL_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let request_id = request_id_or_generate(
        headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
    );

    RoutedRequest::new(
        RequestMethod::classify(method.as_str()),
        uri.path(),
        payload_url,
        request_id,
    )
}
