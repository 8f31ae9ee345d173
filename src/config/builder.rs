// src/config/builder.rs

use super::parsing::{normalize_extension, pattern_or_default};
use super::path_resolve::resolve_base_directory;
use super::{TargetSpec, TimestampPattern};
use crate::cli::Cli;
use crate::constants::DEFAULT_EXTENSION;
use crate::errors::Result;

/// A builder for creating a `TargetSpec` programmatically.
///
/// Every setting is optional; unset values fall back to the defaults of the
/// interactive tool: extension `jpg`, pattern `%Y-%m-%d-%H-%M-%S`, recursive
/// scanning and skipping of already-prefixed files. The directory has no
/// default and must be set.
///
/// # Examples
///
/// ```
/// use rename2date::config::TargetSpecBuilder;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// let spec = TargetSpecBuilder::new()
///     .directory(temp.path().to_str().unwrap())
///     .extension("PNG")
///     .recursive(false)
///     .build()?;
///
/// assert_eq!(spec.extension_filter, ".png");
/// assert!(!spec.recursive);
/// assert!(spec.skip_already_prefixed);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct TargetSpecBuilder {
    directory: Option<String>,
    extension: Option<String>,
    pattern: Option<String>,
    recursive: Option<bool>,
    skip_already_prefixed: Option<bool>,
}

impl TargetSpecBuilder {
    /// Creates a new builder with no settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            directory: Some(cli.directory),
            extension: Some(cli.extension),
            pattern: Some(cli.pattern),
            recursive: Some(!cli.no_recursive),
            skip_already_prefixed: Some(!cli.no_skip_prefixed),
        }
    }

    /// Sets the directory to scan.
    pub fn directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Sets the extension filter (`jpg` and `.JPG` are equivalent).
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Sets the strftime-style pattern. A blank pattern means the default.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets whether subdirectories are scanned.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }

    /// Sets whether files already carrying the current prefix are skipped.
    pub fn skip_already_prefixed(mut self, skip: bool) -> Self {
        self.skip_already_prefixed = Some(skip);
        self
    }

    /// Validates the settings and builds the `TargetSpec`.
    ///
    /// Validation runs in the order directory, extension, pattern, and stops
    /// at the first failure.
    pub fn build(self) -> Result<TargetSpec> {
        let base_directory = resolve_base_directory(self.directory.as_deref().unwrap_or(""))?;
        let extension_filter =
            normalize_extension(self.extension.as_deref().unwrap_or(DEFAULT_EXTENSION))?;
        let pattern = TimestampPattern::parse(pattern_or_default(self.pattern.as_deref()))?;

        let spec = TargetSpec {
            base_directory,
            extension_filter,
            pattern,
            recursive: self.recursive.unwrap_or(true),
            skip_already_prefixed: self.skip_already_prefixed.unwrap_or(true),
        };
        log::debug!("Built target spec: {:?}", spec);
        Ok(spec)
    }
}
