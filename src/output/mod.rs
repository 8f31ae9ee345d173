// src/output/mod.rs

//! Renders preview entries, run outcomes and the final summary as text lines.
//!
//! Every writer here takes a `&mut dyn Write`, so the same code serves stdout,
//! a buffer in tests, or any other sink a front end provides.

pub mod header;
pub mod preview;
pub mod report;
pub mod summary;

pub use header::{write_preview_header, write_run_header};
pub use preview::write_preview_output;
pub use report::{LogLineReporter, NoOpReporter, OutcomeReporter};
pub use summary::write_summary;
