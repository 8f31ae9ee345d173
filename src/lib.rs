//! `rename2date` is a library and command-line tool that renames files by
//! prefixing each name with a timestamp taken from the file's last
//! modification time.
//!
//! `photo.jpg`, last modified on 2024-03-05 at 14:30:00, becomes
//! `2024-03-05-14-30-00_photo.jpg` with the default pattern. Existing files are
//! never overwritten: if the target name is taken, `-1`, `-2`, ... is appended
//! to its stem.
//!
//! The library exposes two entry points that share one pipeline:
//! 1.  **Discover**: walk the base directory and keep regular files whose
//!     extension matches the filter.
//! 2.  **Plan**: compute each file's prefix, apply the skip policy and resolve
//!     a unique target name.
//! 3.  **Rename**: move the file, recording a per-file outcome.
//!
//! [`preview`] stops after step 2 for the first ten files; [`execute`] runs all
//! three for every file.
//!
//! # Example: Library Usage
//!
//! ```
//! use rename2date::{execute, preview, TargetSpecBuilder};
//! use rename2date::output::NoOpReporter;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let temp_dir = tempdir()?;
//! fs::write(temp_dir.path().join("photo.jpg"), "jpeg")?;
//! fs::write(temp_dir.path().join("notes.txt"), "text")?;
//!
//! let spec = TargetSpecBuilder::new()
//!     .directory(temp_dir.path().to_str().unwrap())
//!     .extension("jpg")
//!     .pattern("%Y%m%d")
//!     .build()?;
//!
//! // Preview what would happen.
//! let entries = preview(&spec)?;
//! assert_eq!(entries.len(), 1);
//! assert!(entries[0].resolved_name.ends_with("_photo.jpg"));
//!
//! // Rename for real.
//! let summary = execute(&spec, &mut NoOpReporter)?;
//! assert_eq!(summary.renamed_count, 1);
//!
//! // Running again skips the file: it already carries the prefix.
//! let again = execute(&spec, &mut NoOpReporter)?;
//! assert_eq!(again.renamed_count, 0);
//! assert_eq!(again.skipped_count, 1);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod naming;
pub mod output;
pub mod planner;
pub mod prelude;

// Re-export key public types for easier use as a library
pub use config::{TargetSpec, TargetSpecBuilder, TimestampPattern};
pub use core_types::{FileCandidate, PreviewEntry, RenameOutcome, RunSummary, SkipReason};

use crate::errors::Result;
use crate::output::OutcomeReporter;

/// Shows what the first files matching `spec` would be renamed to.
///
/// Nothing on disk is modified. At most `PREVIEW_LIMIT` (10) entries are
/// returned; files skipped because they already carry their prefix do not
/// count. The directory walk stops as soon as the limit is reached.
///
/// # Errors
/// Returns `Error::Directory` if the base directory can no longer be walked.
pub fn preview(spec: &TargetSpec) -> Result<Vec<PreviewEntry>> {
    let candidates = discovery::discover_candidates(spec)?;
    let entries = planner::preview_candidates(candidates, spec);
    log::debug!("Preview produced {} entries.", entries.len());
    Ok(entries)
}

/// Renames every file matching `spec` and returns the tally.
///
/// Files are processed one at a time, and each outcome is handed to
/// `reporter` as soon as it is known. A failed rename is recorded as
/// `RenameOutcome::Errored` and the run continues.
///
/// # Errors
/// Returns `Error::Directory` if the base directory can no longer be walked.
/// No per-file problem is ever returned as an error.
pub fn execute(spec: &TargetSpec, reporter: &mut dyn OutcomeReporter) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for candidate in discovery::discover_candidates(spec)? {
        let outcome = planner::process_candidate(&candidate, spec);
        summary.record(&outcome);
        reporter.report(&outcome);
    }
    log::info!(
        "Run complete. Renamed: {}, Skipped: {}, Errors: {}",
        summary.renamed_count,
        summary.skipped_count,
        summary.error_count
    );
    Ok(summary)
}
