// src/config/pattern.rs

use crate::constants::DEFAULT_PATTERN;
use crate::errors::ConfigError;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Write};
use std::path::MAIN_SEPARATOR;

/// A strftime-style timestamp pattern that is known to format cleanly.
///
/// The only way to obtain one is [`TimestampPattern::parse`] (or `Default`,
/// which yields `%Y-%m-%d-%H-%M-%S`), so formatting never fails afterwards.
///
/// # Examples
///
/// ```
/// use rename2date::config::TimestampPattern;
/// use chrono::{Local, TimeZone};
///
/// let pattern = TimestampPattern::parse("%Y%m%d").unwrap();
/// let instant = Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
/// assert_eq!(pattern.format(&instant), "20240305");
///
/// assert!(TimestampPattern::parse("%Y-%").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampPattern(String);

impl TimestampPattern {
    /// Validates `raw` by formatting the current instant with it.
    ///
    /// Rejects malformed specifiers, patterns that render to nothing, and
    /// patterns whose output contains a path separator (the prefix must stay a
    /// single path component).
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        let rendered = render(&Local::now(), raw)
            .map_err(|_| invalid("unsupported or malformed format specifier"))?;
        if rendered.is_empty() {
            return Err(invalid("pattern produces an empty prefix"));
        }
        if rendered.contains('/') || rendered.contains(MAIN_SEPARATOR) {
            return Err(invalid("pattern produces a path separator"));
        }
        Ok(Self(raw.to_string()))
    }

    /// The pattern text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats `instant` with this pattern.
    pub fn format<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        // Validated in `parse`; a well-formed pattern cannot fail to render.
        render(instant, &self.0).unwrap_or_default()
    }
}

impl Default for TimestampPattern {
    fn default() -> Self {
        Self(DEFAULT_PATTERN.to_string())
    }
}

impl fmt::Display for TimestampPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn render<Tz: TimeZone>(instant: &DateTime<Tz>, pattern: &str) -> Result<String, fmt::Error>
where
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", instant.format(pattern))?;
    Ok(out)
}
