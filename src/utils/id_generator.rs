//! Random short identifier generation.
//!
//! Identifiers are drawn uniformly from the 62 ASCII letters and digits.

use rand::Rng;

/// Symbols an identifier may contain.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of candidate identifiers.
///
/// Implementations are pure generators that don't interact with storage;
/// uniqueness is enforced by the store's conditional insert.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produces a candidate identifier of `length` symbols.
    fn generate(&self, length: usize) -> String;
}

/// Generator backed by the calling thread's random number generator.
///
/// Holds no state, so concurrent allocations never share a random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericGenerator;

impl IdGenerator for AlphanumericGenerator {
    fn generate(&self, length: usize) -> String {
        generate_id(length)
    }
}

/// Generates a random identifier of `length` symbols from [`ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let id = generate_id(7);
/// assert_eq!(id.len(), 7);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_id(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if every character of `id` belongs to [`ALPHABET`].
pub fn is_alphabet_only(id: &str) -> bool {
    id.bytes().all(|b| b.is_ascii_alphanumeric())
}
