use ignore::WalkBuilder;
use log::debug;
use std::path::Path;

/// Configures and builds a sequential `ignore::Walk` over `base_directory`.
///
/// Standard filters are disabled: hidden files and VCS-ignored files are
/// renamed like any other. Symlinked directories are not followed.
///
/// Entries are sorted by file name within each directory. Besides making the
/// order deterministic, this makes the walker read each directory in full
/// before yielding from it, so a file renamed mid-run is not visited again
/// under its new name.
pub(super) fn build_walker(base_directory: &Path, recursive: bool) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(base_directory);

    walker_builder.standard_filters(false);
    walker_builder.follow_links(false);
    walker_builder.sort_by_file_name(|a, b| a.cmp(b));
    debug!("Configuring WalkBuilder: standard_filters disabled, sorted by file name.");

    if !recursive {
        // Max depth 1 means only the immediate children of the base directory
        walker_builder.max_depth(Some(1));
        debug!("Recursion disabled (max depth: 1).");
    } else {
        debug!("Recursion enabled (no max depth).");
    }

    walker_builder.build()
}
