// src/discovery/entry_processor.rs

use crate::core_types::FileCandidate;
use crate::filtering::{is_regular_file, passes_extension_filter};
use ignore::DirEntry;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};

/// Processes a single directory entry from the walk.
///
/// Returns `Some(path)` if the entry resolves to a regular file. Walker errors
/// (e.g. an unreadable subdirectory) are logged and the entry is skipped.
pub(crate) fn process_direntry(entry_result: Result<DirEntry, ignore::Error>) -> Option<PathBuf> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };

    if entry.file_type().is_some_and(|ft| ft.is_dir()) {
        trace!("Skipping directory entry: {}", entry.path().display());
        return None;
    }

    let path = entry.into_path();
    if !is_regular_file(&path) {
        trace!("Skipping non-file entry: {}", path.display());
        return None;
    }
    Some(path)
}

/// Applies the extension filter and wraps a matching path in a `FileCandidate`.
pub(crate) fn to_candidate(path: &Path, extension_filter: &str) -> Option<FileCandidate> {
    if !passes_extension_filter(path, extension_filter) {
        trace!("Skipping file due to extension filter: {}", path.display());
        return None;
    }
    let candidate = FileCandidate::from_path(path)?;
    debug!("Candidate: {}", path.display());
    Some(candidate)
}
