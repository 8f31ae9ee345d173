//! Turns a file path into its timestamp-prefixed target name.
//!
//! - `prefix`: formats a file's modification time into the prefix string.
//! - `resolve`: joins prefix and name, then disambiguates against the filesystem.
//! - `skip`: decides whether a name already carries the prefix.

mod prefix;
mod resolve;
mod skip;

pub use prefix::{compute_prefix, modification_time};
pub use resolve::{build_candidate_name, ensure_unique};
pub use skip::should_skip;
