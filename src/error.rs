//! Error types for the radix index.

/// Errors reported by [`RadixTree`](crate::RadixTree) operations.
///
/// Missing prefixes and empty result sets are not errors; they come back as
/// empty collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The call was malformed, e.g. inserting the empty string.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Short description of what was wrong with the input.
        reason: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = TrieError> = core::result::Result<T, E>;
