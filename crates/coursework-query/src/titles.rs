//! Ordering text titles by a derived key.
//!
//! The same length ordering can be expressed as a key closure, as a
//! comparator closure, or as a named comparator function; all three sort
//! identically.

use std::cmp::Ordering;

/// Reading-list titles used by the ordering demonstration.
pub const SAMPLE_TITLES: [&str; 3] = [
    "Biblioteca Católica",
    "Código de Direito Canônico",
    "Catecismo da Igreja Católica",
];

/// Number of characters (not bytes) in `title`.
pub fn title_length(title: &str) -> usize {
    title.chars().count()
}

/// Compares two titles by character count.
pub fn compare_by_length(a: &str, b: &str) -> Ordering {
    title_length(a).cmp(&title_length(b))
}

/// Sorts titles ascending by character count. Stable.
pub fn sort_by_length<S: AsRef<str>>(titles: &mut [S]) {
    titles.sort_by_key(|t| title_length(t.as_ref()));
}

/// Sorts titles with a caller-supplied comparator. Stable.
pub fn sort_with<S, F>(titles: &mut [S], mut compare: F)
where
    S: AsRef<str>,
    F: FnMut(&str, &str) -> Ordering,
{
    titles.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
}
