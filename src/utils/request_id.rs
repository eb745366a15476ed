//! Request identifiers for log correlation.

use rand::Rng;

/// Longest caller-supplied request id that is accepted verbatim.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Generates a random request id of 32 lowercase hex digits.
pub fn generate_request_id() -> String {
    format!("{:032x}", rand::rng().random::<u128>())
}

/// Uses the caller-supplied id when it is usable, otherwise generates one.
///
/// Supplied ids must be non-empty, printable ASCII and at most 128 bytes so
/// they cannot break log lines.
pub fn request_id_or_generate(supplied: Option<&str>) -> String {
    match supplied.map(str::trim) {
        Some(id)
            if !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.bytes().all(|b| b.is_ascii_graphic()) =>
        {
            id.to_string()
        }
        _ => generate_request_id(),
    }
}
