//! Identifier extraction from request paths.
//!
//! Only `/<id>` and `/<id>/` resolve; everything else is rejected before the
//! store is consulted.

use crate::error::AppError;
use crate::utils::id_generator::is_alphabet_only;

/// Extracts the link identifier from a read path.
///
/// # Rules
///
/// - Path must start with `/`
/// - Exactly one non-empty segment, optionally followed by a single `/`
/// - Segment length must equal `id_length`
/// - Segment may only contain ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::InvalidPath`] if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_link_id("/aB3dE5g", 7).unwrap(), "aB3dE5g");
/// assert_eq!(extract_link_id("/aB3dE5g/", 7).unwrap(), "aB3dE5g");
/// assert!(extract_link_id("/aB3dE5g/more", 7).is_err());
/// assert!(extract_link_id("/abc", 7).is_err());
/// ```
pub fn extract_link_id(path: &str, id_length: usize) -> Result<&str, AppError> {
    let rest = path
        .strip_prefix('/')
        .ok_or_else(|| AppError::InvalidPath(path.to_string()))?;

    let id = match rest.split_once('/') {
        None => rest,
        Some((id, "")) => id,
        Some(_) => return Err(AppError::InvalidPath(path.to_string())),
    };

    if id.len() != id_length || !is_alphabet_only(id) {
        return Err(AppError::InvalidPath(path.to_string()));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_id() {
        assert_eq!(extract_link_id("/ab12cd9", 7).unwrap(), "ab12cd9");
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(extract_link_id("/ab12cd9/", 7).unwrap(), "ab12cd9");
    }

    #[test]
    fn test_wrong_length() {
        assert!(matches!(
            extract_link_id("/abc", 7),
            Err(AppError::InvalidPath(_))
        ));
        assert!(extract_link_id("/ab12cd9x", 7).is_err());
    }

    #[test]
    fn test_extra_segment() {
        assert!(extract_link_id("/ab12cd9/extra", 7).is_err());
        assert!(extract_link_id("/ab12cd9//", 7).is_err());
        assert!(extract_link_id("/ab12cd9/x/", 7).is_err());
    }

    #[test]
    fn test_empty_and_root() {
        assert!(extract_link_id("", 7).is_err());
        assert!(extract_link_id("/", 7).is_err());
        assert!(extract_link_id("//", 7).is_err());
    }

    #[test]
    fn test_missing_leading_slash() {
        assert!(extract_link_id("ab12cd9", 7).is_err());
    }

    #[test]
    fn test_short_id_then_segment_is_rejected() {
        // a valid-length second segment does not rescue a short first one
        assert!(extract_link_id("/abc/ab12cd9", 7).is_err());
    }

    #[test]
    fn test_symbols_outside_alphabet() {
        assert!(extract_link_id("/ab-2cd9", 7).is_err());
        assert!(extract_link_id("/ab%2cd9", 7).is_err());
    }

    #[test]
    fn test_multibyte_characters_are_rejected() {
        assert!(extract_link_id("/abcdéf", 7).is_err());
    }

    #[test]
    fn test_respects_configured_length() {
        assert_eq!(extract_link_id("/abc", 3).unwrap(), "abc");
        assert!(extract_link_id("/ab12cd9", 3).is_err());
    }
}
