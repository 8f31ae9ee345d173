// src/filtering/file_type.rs

use std::fs;
use std::path::Path;

/// Checks if the path resolves to a regular file.
///
/// Symlinks are followed, so a link to a file counts while a dangling link or
/// a link to a directory does not.
#[inline]
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|md| md.is_file()).unwrap_or(false)
}
