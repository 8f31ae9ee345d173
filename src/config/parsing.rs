// src/config/parsing.rs

use crate::constants::DEFAULT_PATTERN;
use crate::errors::ConfigError;

/// Normalizes a user-supplied extension to the `.ext` lowercase form.
///
/// Surrounding whitespace is trimmed and a leading dot is added when missing.
/// Returns `ConfigError::EmptyExtension` if nothing is left.
///
/// # Examples
///
/// ```
/// use rename2date::config::normalize_extension;
///
/// assert_eq!(normalize_extension("JPG").unwrap(), ".jpg");
/// assert_eq!(normalize_extension(" .Png ").unwrap(), ".png");
/// assert!(normalize_extension("   ").is_err());
/// ```
pub fn normalize_extension(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyExtension);
    }
    let dotted = if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{}", trimmed)
    };
    Ok(dotted.to_lowercase())
}

/// Trims the pattern, substituting the default for a blank one.
pub(super) fn pattern_or_default(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => DEFAULT_PATTERN,
    }
}
