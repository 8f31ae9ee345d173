// src/naming/prefix.rs

use crate::config::TimestampPattern;
use chrono::{DateTime, Local, Utc};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the file's last-modification time in the local time zone.
///
/// Falls back to the current time if the metadata cannot be read (the file
/// vanished, permissions, or a platform without mtime support), so a single
/// unreadable file never aborts a run. The same fallback applies to an mtime
/// outside the representable date range.
pub fn modification_time(path: &Path) -> DateTime<Local> {
    match fs::metadata(path).and_then(|md| md.modified()) {
        Ok(modified) => local_time(modified).unwrap_or_else(|| {
            log::warn!(
                "Modification time of '{}' is out of range, using current time",
                path.display()
            );
            Local::now()
        }),
        Err(e) => {
            log::warn!(
                "Could not read modification time of '{}', using current time: {}",
                path.display(),
                e
            );
            Local::now()
        }
    }
}

/// Converts a `SystemTime` to local time, or `None` if it cannot be represented.
fn local_time(time: SystemTime) -> Option<DateTime<Local>> {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).ok()?, after.subsec_nanos()),
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => (-secs, 0),
                n => (-secs - 1, 1_000_000_000 - n),
            }
        }
    };
    DateTime::<Utc>::from_timestamp(secs, nanos).map(|t| t.with_timezone(&Local))
}

/// Computes the timestamp prefix for `path` using `pattern`.
///
/// # Examples
///
/// ```
/// use rename2date::config::TimestampPattern;
/// use rename2date::naming::compute_prefix;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// let photo = temp.path().join("photo.jpg");
/// fs::write(&photo, "jpeg")?;
///
/// let pattern = TimestampPattern::parse("%Y")?;
/// assert_eq!(compute_prefix(&photo, &pattern).len(), 4);
/// # Ok(())
/// # }
/// ```
pub fn compute_prefix(path: &Path, pattern: &TimestampPattern) -> String {
    pattern.format(&modification_time(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use filetime::{set_file_mtime, FileTime};
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_prefix_from_mtime() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let photo = temp.path().join("photo.jpg");
        fs::write(&photo, "jpeg")?;
        let instant = Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        set_file_mtime(&photo, FileTime::from_unix_time(instant.timestamp(), 0))?;

        let prefix = compute_prefix(&photo, &TimestampPattern::default());
        assert_eq!(prefix, "2024-03-05-14-30-00");
        Ok(())
    }

    #[test]
    fn test_same_inputs_same_prefix() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let photo = temp.path().join("photo.jpg");
        fs::write(&photo, "jpeg")?;
        let pattern = TimestampPattern::parse("%Y%m%d%H%M%S")?;
        assert_eq!(
            compute_prefix(&photo, &pattern),
            compute_prefix(&photo, &pattern)
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_falls_back_to_now() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let missing = temp.path().join("gone.jpg");
        let pattern = TimestampPattern::parse("%Y")?;

        let before = Local::now().format("%Y").to_string();
        let prefix = compute_prefix(&missing, &pattern);
        let after = Local::now().format("%Y").to_string();
        assert!(prefix == before || prefix == after);
        Ok(())
    }

    #[test]
    fn test_local_time_out_of_range_is_none() {
        let far_future = UNIX_EPOCH + Duration::from_secs(9_000_000_000_000);
        assert!(local_time(far_future).is_none());
    }

    #[test]
    fn test_local_time_matches_chrono_in_range() {
        let after = UNIX_EPOCH + Duration::new(1_709_649_000, 250);
        assert_eq!(local_time(after), Some(DateTime::<Local>::from(after)));

        let before = UNIX_EPOCH - Duration::new(86_400, 500_000_000);
        let converted = local_time(before).unwrap();
        assert_eq!(converted.timestamp(), -86_401);
        assert_eq!(converted.timestamp_subsec_nanos(), 500_000_000);
    }
}
