// src/output/report.rs

//! Defines a trait for receiving per-file outcomes while a run is in progress.
use crate::core_types::RenameOutcome;
use std::io::Write;

/// A sink for rename outcomes, called once per candidate as soon as it has
/// been processed.
///
/// # Examples
///
/// ```
/// use rename2date::core_types::{RenameOutcome, SkipReason};
/// use rename2date::output::OutcomeReporter;
/// use std::path::PathBuf;
///
/// // A reporter that just counts what it sees.
/// struct Counter(usize);
/// impl OutcomeReporter for Counter {
///     fn report(&mut self, _outcome: &RenameOutcome) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = Counter(0);
/// counter.report(&RenameOutcome::Skipped {
///     path: PathBuf::from("a.jpg"),
///     reason: SkipReason::AlreadyPrefixed,
/// });
/// assert_eq!(counter.0, 1);
/// ```
pub trait OutcomeReporter {
    /// Receives the outcome for one candidate.
    fn report(&mut self, outcome: &RenameOutcome);
}

/// An `OutcomeReporter` that does nothing.
pub struct NoOpReporter;

impl OutcomeReporter for NoOpReporter {
    fn report(&mut self, _outcome: &RenameOutcome) {}
}

/// An `OutcomeReporter` that writes each outcome's log line to a writer.
///
/// Skips produce no line. Write failures are logged and otherwise ignored; the
/// run itself must not fail because the log could not be written.
pub struct LogLineReporter<W: Write> {
    writer: W,
}

impl<W: Write> LogLineReporter<W> {
    /// Creates a reporter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutcomeReporter for LogLineReporter<W> {
    fn report(&mut self, outcome: &RenameOutcome) {
        if let Some(line) = outcome.log_line() {
            if let Err(e) = writeln!(self.writer, "{}", line).and_then(|_| self.writer.flush()) {
                log::warn!("Failed to write log line '{}': {}", line, e);
            }
        }
    }
}
