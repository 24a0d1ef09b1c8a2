//! Shared utility helpers.

use std::collections::HashSet;

/// Case-insensitive membership check over a slice of names.
#[inline]
pub(crate) fn contains_name_ci(names: &[String], needle: &str) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(needle))
}

/// Lowercased set of names, for order-insensitive column set comparison.
#[inline]
pub(crate) fn name_set(names: &[String]) -> HashSet<String> {
    names.iter().map(|name| name.to_ascii_lowercase()).collect()
}
