// src/filtering/extension.rs

use std::path::Path;

/// Checks if a path's extension equals the normalized `extension_filter`.
///
/// The filter is expected in the `.ext` lowercase form produced by
/// `normalize_extension`; the path's extension is compared case-insensitively.
/// Only the last extension counts, so `archive.tar.gz` has the extension `.gz`,
/// and a dotfile such as `.jpg` has none.
///
/// # Examples
///
/// ```
/// use rename2date::filtering::passes_extension_filter;
/// use std::path::Path;
///
/// assert!(passes_extension_filter(Path::new("a/photo.jpg"), ".jpg"));
/// assert!(passes_extension_filter(Path::new("a/PHOTO.JPG"), ".jpg"));
/// assert!(!passes_extension_filter(Path::new("a/photo.jpeg"), ".jpg"));
/// assert!(!passes_extension_filter(Path::new("a/Makefile"), ".jpg"));
/// ```
pub fn passes_extension_filter(path: &Path, extension_filter: &str) -> bool {
    match path.extension() {
        Some(ext) => {
            let dotted = format!(".{}", ext.to_string_lossy().to_lowercase());
            dotted == extension_filter
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ext_case_insensitive() {
        assert!(passes_extension_filter(Path::new("a.jpg"), ".jpg"));
        assert!(passes_extension_filter(Path::new("a.JPG"), ".jpg"));
        assert!(passes_extension_filter(Path::new("a.JpG"), ".jpg"));
    }

    #[test]
    fn test_ext_exact_match_only() {
        assert!(!passes_extension_filter(Path::new("a.jpeg"), ".jpg"));
        assert!(!passes_extension_filter(Path::new("a.png"), ".jpg"));
        assert!(!passes_extension_filter(Path::new("a.jpg.bak"), ".jpg"));
    }

    #[test]
    fn test_ext_only_last_component_counts() {
        assert!(passes_extension_filter(Path::new("archive.tar.gz"), ".gz"));
        assert!(!passes_extension_filter(Path::new("archive.tar.gz"), ".tar.gz"));
    }

    #[test]
    fn test_ext_missing() {
        assert!(!passes_extension_filter(Path::new("README"), ".jpg"));
        assert!(!passes_extension_filter(Path::new(".jpg"), ".jpg")); // Dotfile, no extension
    }

    #[test]
    fn test_ext_trailing_dot() {
        assert!(passes_extension_filter(Path::new("odd."), "."));
        assert!(!passes_extension_filter(Path::new("odd."), ".jpg"));
    }
}
