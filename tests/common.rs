// tests/common.rs

use chrono::{Local, TimeZone};
use filetime::{set_file_mtime, FileTime};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Prefix produced by the default pattern for a file pinned with `write_pinned`.
#[allow(dead_code)]
pub const PINNED_PREFIX: &str = "2024-03-05-14-30-00";

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn rename2date_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("rename2date"))
}

/// Writes a file (creating parent directories) and pins its mtime to
/// 2024-03-05 14:30:00 local time.
#[allow(dead_code)]
pub fn write_pinned(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    let instant = Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
    set_file_mtime(path, FileTime::from_unix_time(instant.timestamp(), 0))
}
