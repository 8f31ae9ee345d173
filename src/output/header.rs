// src/output/header.rs

use crate::config::TargetSpec;
use crate::constants::PREVIEW_LIMIT;
use anyhow::Result;
use std::io::Write;

/// Writes the line announcing a preview and the settings it uses.
pub fn write_preview_header(writer: &mut dyn Write, spec: &TargetSpec) -> Result<()> {
    writeln!(
        writer,
        "Preview (first {}) for directory={}, ext={}, pattern='{}', recursive={}",
        PREVIEW_LIMIT,
        spec.base_directory.display(),
        spec.extension_filter,
        spec.pattern,
        spec.recursive
    )?;
    Ok(())
}

/// Writes the line announcing a rename run and the settings it uses.
pub fn write_run_header(writer: &mut dyn Write, spec: &TargetSpec) -> Result<()> {
    writeln!(
        writer,
        "Starting rename in {} (recursive={}) for extension {} with pattern '{}'",
        spec.base_directory.display(),
        spec.recursive,
        spec.extension_filter,
        spec.pattern
    )?;
    Ok(())
}
