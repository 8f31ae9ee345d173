// src/filtering/mod.rs

//! Provides standalone functions for the second-stage candidate filter.
//!
//! Discovery yields every directory entry; a path becomes a rename target only
//! if it is a regular file and its extension matches the configured filter.

mod extension;
mod file_type;

pub use extension::passes_extension_filter;
pub use file_type::is_regular_file;
