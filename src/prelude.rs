//! The `rename2date` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `rename2date` library.
//!
//! # Example
//!
//! ```
//! use rename2date::prelude::*;
//! # use tempfile::tempdir;
//! # fn main() -> Result<()> {
//! # let temp = tempdir().unwrap();
//! # let dir = temp.path().to_str().unwrap();
//!
//! let spec = TargetSpecBuilder::new().directory(dir).build()?;
//! let entries = preview(&spec)?;
//! let summary = execute(&spec, &mut NoOpReporter)?;
//! assert_eq!(summary.renamed_count, entries.len());
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{normalize_extension, TargetSpec, TargetSpecBuilder, TimestampPattern};
pub use crate::core_types::{FileCandidate, PreviewEntry, RenameOutcome, RunSummary, SkipReason};
pub use crate::discovery::{discover_candidates, enumerate};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::filtering::{is_regular_file, passes_extension_filter};
pub use crate::naming::{build_candidate_name, compute_prefix, ensure_unique, should_skip};
pub use crate::output::{LogLineReporter, NoOpReporter, OutcomeReporter};
pub use crate::{execute, preview};
