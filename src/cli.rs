// src/cli.rs

use crate::constants::{DEFAULT_EXTENSION, DEFAULT_PATTERN};
use clap::Parser;

/// Rename files by prefixing each name with its modification time.
///
/// rename2date scans a directory (recursively by default) for files with a
/// given extension and renames `photo.jpg` to `<timestamp>_photo.jpg`, where
/// the timestamp is the file's last-modification time formatted with a
/// strftime-style pattern. Existing names are never overwritten: a `-1`, `-2`,
/// ... suffix is added on collision.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory containing the files to rename.
    pub directory: String,

    /// Only rename files with this extension (case-insensitive, e.g. "jpg" or ".jpg").
    #[arg(short = 'e', long = "ext", value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// strftime pattern used to format the modification time.
    #[arg(short = 'p', long, value_name = "PATTERN", default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Do not scan subdirectories.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    pub no_recursive: bool,

    /// Rename files even if they already start with the computed prefix.
    #[arg(short = 'k', long, action = clap::ArgAction::SetTrue)]
    pub no_skip_prefixed: bool,

    /// Show what the first 10 files would be renamed to, without renaming anything.
    #[arg(short = 'D', long, alias = "dry-run", action = clap::ArgAction::SetTrue)]
    pub preview: bool,
}
