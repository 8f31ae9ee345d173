// src/naming/skip.rs

use crate::constants::PREFIX_SEPARATOR;

/// Checks whether `filename` already starts with `<prefix>_`.
///
/// This is a purely textual check against the prefix computed now. A file
/// renamed under a different pattern, or touched since, is not recognised.
///
/// # Examples
///
/// ```
/// use rename2date::naming::should_skip;
///
/// assert!(should_skip("2024-03-05_photo.jpg", "2024-03-05"));
/// assert!(!should_skip("2024-03-05photo.jpg", "2024-03-05"));
/// assert!(!should_skip("photo.jpg", "2024-03-05"));
/// ```
pub fn should_skip(filename: &str, prefix: &str) -> bool {
    filename
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with(PREFIX_SEPARATOR))
}
