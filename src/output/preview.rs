// src/output/preview.rs

use crate::constants::{COLLISION_NOTE, NO_PREVIEW_MATCHES};
use crate::core_types::PreviewEntry;
use anyhow::Result;
use log::debug;
use std::io::Write;

/// Writes one `old -> new` line per preview entry, in the order given.
///
/// Entries whose target had to be disambiguated carry a collision note. An
/// empty slice produces a single "no matching files" line instead.
pub fn write_preview_output(writer: &mut dyn Write, entries: &[PreviewEntry]) -> Result<()> {
    debug!("Writing preview for {} entries...", entries.len());
    if entries.is_empty() {
        writeln!(writer, "{}", NO_PREVIEW_MATCHES)?;
    }
    for entry in entries {
        let note = if entry.collision { COLLISION_NOTE } else { "" };
        writeln!(
            writer,
            "{} -> {}{}",
            entry.original_name, entry.resolved_name, note
        )?;
    }
    writer.flush()?;
    Ok(())
}
