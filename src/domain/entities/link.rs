//! Link entity representing a stored identifier to URL mapping.

/// A shortened URL mapping.
///
/// Records are created once by the allocator and never updated; the store
/// only offers create-if-absent and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub id: String,
    pub url: String,
}

impl LinkRecord {
    /// Creates a new LinkRecord instance.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}
