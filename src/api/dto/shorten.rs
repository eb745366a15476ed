//! DTOs for link shortening.

use serde::{Deserialize, Serialize};

/// Body returned after a successful allocation.
///
/// ```json
/// { "UrlId": "aB3dE5g" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    #[serde(rename = "UrlId")]
    pub url_id: String,
}
