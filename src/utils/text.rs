//! Case normalization helpers.
//!
//! All case-insensitive matching in the filter and aggregation code goes
//! through this module so that every comparison uses the same lower-case
//! transform.

/// Lower-cases a string for comparison purposes.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Returns true if `haystack` contains `needle` as a substring, ignoring case.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Returns true if `a` and `b` are equal ignoring case.
pub fn eq_ci(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}
