//! Defines core data structures used throughout the rename pipeline.
//!
//! Every value here is transient: it is produced during one `preview` or
//! `execute` call and dropped once the caller has rendered it.

use std::fmt;
use std::path::{Path, PathBuf};

/// A file yielded by discovery that passed the type and extension filters.
///
/// # Examples
///
/// ```
/// use rename2date::core_types::FileCandidate;
/// use std::path::Path;
///
/// let candidate = FileCandidate::from_path(Path::new("/photos/IMG_001.JPG")).unwrap();
/// assert_eq!(candidate.filename, "IMG_001.JPG");
/// assert_eq!(candidate.directory, Path::new("/photos"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// The path as yielded by the directory walk.
    pub original_path: PathBuf,
    /// The directory containing the file. Renames never leave it.
    pub directory: PathBuf,
    /// The final path component, lossily converted for display and prefix checks.
    pub filename: String,
}

impl FileCandidate {
    /// Builds a candidate from a file path.
    ///
    /// Returns `None` for paths without a final component (e.g. `/` or `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let filename = path.file_name()?.to_string_lossy().into_owned();
        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Some(Self {
            original_path: path.to_path_buf(),
            directory,
            filename,
        })
    }
}

/// Why a candidate was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The filename already starts with `<prefix>_` for the current prefix.
    AlreadyPrefixed,
    /// The resolved target is the file itself.
    NoOpSamePath,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyPrefixed => f.write_str("already-prefixed"),
            SkipReason::NoOpSamePath => f.write_str("no-op-same-path"),
        }
    }
}

/// The result of processing a single candidate in execute mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was moved from `from` to `to`.
    Renamed { from: PathBuf, to: PathBuf },
    /// The file was left as is.
    Skipped { path: PathBuf, reason: SkipReason },
    /// The rename was attempted and the OS refused it.
    Errored { path: PathBuf, message: String },
}

impl RenameOutcome {
    /// Renders the human-readable log line for this outcome.
    ///
    /// Skips produce no line; renames show file names only, errors the full path.
    ///
    /// # Examples
    ///
    /// ```
    /// use rename2date::core_types::RenameOutcome;
    /// use std::path::PathBuf;
    ///
    /// let outcome = RenameOutcome::Renamed {
    ///     from: PathBuf::from("/p/photo.jpg"),
    ///     to: PathBuf::from("/p/2024-03-05_photo.jpg"),
    /// };
    /// assert_eq!(
    ///     outcome.log_line().as_deref(),
    ///     Some("RENAMED: photo.jpg -> 2024-03-05_photo.jpg")
    /// );
    /// ```
    pub fn log_line(&self) -> Option<String> {
        match self {
            RenameOutcome::Renamed { from, to } => Some(format!(
                "RENAMED: {} -> {}",
                display_name(from),
                display_name(to)
            )),
            RenameOutcome::Errored { path, message } => {
                Some(format!("ERROR: {}: {}", path.display(), message))
            }
            RenameOutcome::Skipped { .. } => None,
        }
    }
}

/// Counters accumulated over one execute run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub renamed_count: usize,
    pub skipped_count: usize,
    pub error_count: usize,
}

impl RunSummary {
    /// Adds one outcome to the tally.
    pub fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } => self.renamed_count += 1,
            RenameOutcome::Skipped { .. } => self.skipped_count += 1,
            RenameOutcome::Errored { .. } => self.error_count += 1,
        }
    }

    /// Total number of candidates that were processed.
    pub fn total(&self) -> usize {
        self.renamed_count + self.skipped_count + self.error_count
    }
}

/// One line of a preview: what a file would be renamed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    /// The current file name.
    pub original_name: String,
    /// The name the file would receive, after collision resolution.
    pub resolved_name: String,
    /// Whether the plain `<prefix>_<name>` target was taken and a suffix was added.
    pub collision: bool,
}

/// Lossy file name of a path, falling back to the whole path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
