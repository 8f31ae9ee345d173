// src/naming/resolve.rs

use crate::constants::{COLLISION_SEPARATOR, PREFIX_SEPARATOR};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds `<dir>/<prefix>_<filename>` for `path`.
///
/// The original file name, extension included, is kept byte for byte.
///
/// # Examples
///
/// ```
/// use rename2date::naming::build_candidate_name;
/// use std::path::Path;
///
/// assert_eq!(
///     build_candidate_name(Path::new("/p/photo.jpg"), "2024-03-05"),
///     Path::new("/p/2024-03-05_photo.jpg")
/// );
/// ```
pub fn build_candidate_name(path: &Path, prefix: &str) -> PathBuf {
    let Some(file_name) = path.file_name() else {
        return path.to_path_buf();
    };
    let mut new_name = OsString::from(prefix);
    new_name.push(PREFIX_SEPARATOR.to_string());
    new_name.push(file_name);
    path.with_file_name(new_name)
}

/// Returns `candidate` if nothing exists there, otherwise the first free
/// `<stem>-N<ext>` sibling for N = 1, 2, ...
///
/// Existence is checked against the filesystem on every call, so files created
/// by earlier renames in the same run (or by other processes) are respected.
/// A dangling symlink counts as taken.
pub fn ensure_unique(candidate: &Path) -> PathBuf {
    if !path_exists(candidate) {
        return candidate.to_path_buf();
    }

    let stem = candidate.file_stem().unwrap_or_default();
    let extension = candidate.extension();
    let mut counter: u64 = 1;
    loop {
        let mut name = stem.to_os_string();
        name.push(format!("{}{}", COLLISION_SEPARATOR, counter));
        if let Some(ext) = extension {
            name.push(".");
            name.push(ext);
        }
        let probe = candidate.with_file_name(name);
        if !path_exists(&probe) {
            log::debug!(
                "Resolved collision for '{}' to '{}'",
                candidate.display(),
                probe.display()
            );
            return probe;
        }
        counter += 1;
    }
}

fn path_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
