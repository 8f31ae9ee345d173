//! Defines the `TargetSpec` struct describing one rename invocation.
//!
//! A `TargetSpec` is only ever produced by `TargetSpecBuilder::build`, which
//! performs all pre-flight validation. The core entry points (`preview`,
//! `execute`) take it by reference and never re-validate user input.

use std::path::PathBuf;

pub use builder::TargetSpecBuilder;
pub use pattern::TimestampPattern;

mod builder;
mod parsing;
pub mod path_resolve;
mod pattern;

pub use parsing::normalize_extension;

/// Validated settings for a single preview or execute run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    /// Absolute, canonical directory to scan.
    pub base_directory: PathBuf,
    /// Lowercase extension with a leading dot, e.g. `.jpg`.
    pub extension_filter: String,
    /// strftime-style pattern, already checked against the current instant.
    pub pattern: TimestampPattern,
    /// Whether to descend into subdirectories.
    pub recursive: bool,
    /// Whether files already carrying the current prefix are left alone.
    pub skip_already_prefixed: bool,
}

impl TargetSpec {
    /// Creates a spec for tests and doc tests, bypassing directory validation.
    #[doc(hidden)]
    pub fn new_for_test(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: base_directory.into(),
            extension_filter: ".jpg".to_string(),
            pattern: TimestampPattern::default(),
            recursive: true,
            skip_already_prefixed: true,
        }
    }
}
