// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, ConfigError, Result};
use std::fs;
use std::path::PathBuf;

/// Resolves the base directory string to an absolute, canonicalized `PathBuf`.
///
/// Fails with a `ConfigError` if the string is blank, the path does not exist,
/// or it is not a directory.
pub fn resolve_base_directory(raw: &str) -> Result<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingDirectory.into());
    }
    let path = PathBuf::from(trimmed);
    let metadata = match fs::metadata(&path) {
        Ok(md) => md,
        Err(e) => {
            log::debug!("Base directory '{}' is not accessible: {}", trimmed, e);
            return Err(ConfigError::DirectoryNotFound(trimmed.to_string()).into());
        }
    };
    if !metadata.is_dir() {
        return Err(ConfigError::NotADirectory(trimmed.to_string()).into());
    }
    path.canonicalize().map_err(|e| io_error_with_path(e, &path))
}
