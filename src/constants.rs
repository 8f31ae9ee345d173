// src/constants.rs

/// Pattern used when none (or a blank one) is supplied.
pub const DEFAULT_PATTERN: &str = "%Y-%m-%d-%H-%M-%S";

/// Extension filter used when none is supplied.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Joins the timestamp prefix to the original filename.
pub const PREFIX_SEPARATOR: char = '_';

/// Joins a colliding stem to its numeric suffix (`stem-1.ext`).
pub const COLLISION_SEPARATOR: char = '-';

/// Maximum number of entries a preview reports.
pub const PREVIEW_LIMIT: usize = 10;

/// Note appended to a preview line whose target name had to be disambiguated.
pub const COLLISION_NOTE: &str = " (collision -> will use unique name)";

/// Line printed when a preview finds nothing to rename.
pub const NO_PREVIEW_MATCHES: &str = "No matching files found for preview.";
