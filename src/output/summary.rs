// src/output/summary.rs

use crate::core_types::RunSummary;
use anyhow::Result;
use std::io::Write;

/// Writes the closing `Done.` line with the run's counters.
pub fn write_summary(writer: &mut dyn Write, summary: &RunSummary) -> Result<()> {
    writeln!(
        writer,
        "Done. Renamed: {}, Skipped: {}, Errors: {}",
        summary.renamed_count, summary.skipped_count, summary.error_count
    )?;
    writer.flush()?;
    Ok(())
}
