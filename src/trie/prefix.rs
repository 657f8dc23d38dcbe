//! Longest-common-prefix helpers.
//!
//! Comparison is done per `char`, so the returned lengths always fall on a
//! UTF-8 boundary of both inputs and can be used directly for slicing.

/// Returns the byte length of the longest common prefix of `a` and `b`.
///
/// Equal `char`s have equal encodings, so the length is valid in both strings.
#[inline]
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|&((_, x), y)| x != y)
        .map_or(a.len().min(b.len()), |((idx, _), _)| idx)
}

/// Returns the longest string that is a prefix of both `a` and `b`.
///
/// The result borrows from `a`. It is empty when the first characters differ
/// or either input is empty.
#[inline]
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    &a[..common_prefix_len(a, b)]
}
