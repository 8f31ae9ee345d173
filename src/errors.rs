//! Defines application-specific error types.
//!
//! `Error` is the crate-wide error returned by the library entry points.
//! `ConfigError` covers the pre-flight validation of a `TargetSpec`; once
//! validation passes, no error is fatal to a run. Per-file rename failures are
//! reported as `RenameOutcome::Errored` rather than through this module.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for `rename2date` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating user-supplied settings.
///
/// These are reported once, before any file is touched.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// No base directory was supplied (or it was blank).
    #[error("Select a directory.")]
    MissingDirectory,

    /// The base directory does not exist.
    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(String),

    /// The base path exists but is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// The extension filter was empty after normalization.
    #[error("Enter a file extension (e.g., jpg or .jpg).")]
    EmptyExtension,

    /// The timestamp pattern could not be used to format the current instant.
    #[error("Invalid strftime pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },
}

/// Application-specific errors used throughout `rename2date`.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid settings, detected before the run starts.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The base directory could not be walked.
    #[error("Cannot enumerate '{}': {reason}", path.display())]
    Directory {
        /// The directory that was to be walked.
        path: PathBuf,
        /// Why it could not be walked.
        reason: String,
    },

    /// Error occurring during file or directory access.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },
}

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
