//! Validation of URLs submitted for shortening.

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;

/// A lowercase scheme followed by `://`.
static SCHEME_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+://").expect("scheme regex is valid"));

/// Checks that a submitted URL is present and scheme-prefixed.
///
/// Only the `<scheme>://` prefix is checked; the rest of the URL is stored
/// verbatim.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if the URL is missing or has no scheme.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url(Some("https://example.com")).unwrap(), "https://example.com");
/// assert!(validate_url(Some("example.com")).is_err());
/// assert!(validate_url(None).is_err());
/// ```
pub fn validate_url(url: Option<&str>) -> Result<&str, AppError> {
    let url = url.ok_or_else(|| AppError::InvalidUrl("missing URL".to_string()))?;

    if !SCHEME_PREFIX_REGEX.is_match(url) {
        return Err(AppError::InvalidUrl(format!(
            "missing protocol prefix in URL: {url}"
        )));
    }

    Ok(url)
}
