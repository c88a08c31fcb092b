//! Timestamped audit log for violation reports.
//!
//! The log is an explicit sink handed to [`validate_df`](super::validate_df)
//! rather than a global logger, so each pipeline run (or test) owns its
//! destination. Entries look like:
//!
//! ```text
//! 2024-12-04 10:15:02,117 -
//! {
//!   "schema": "adult_income",
//!   "violation_count": 2,
//!   ...
//! }
//! ```

use super::violation::ViolationReport;
use crate::error::{CensusError, Result};
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Default location of the validation-error log, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "data/logs/validation_errors.log";

/// Append-only sink for violation reports.
#[derive(Debug)]
pub struct ViolationLog<W: Write> {
    writer: W,
    entries: usize,
}

impl ViolationLog<File> {
    /// Creates the parent directory if needed and truncates any previous log.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::LogWrite`] if the directory or file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(CensusError::LogWrite)?;
        }

        let file = File::create(path).map_err(CensusError::LogWrite)?;
        log::debug!("Validation log opened at {}", path.display());
        Ok(Self::new(file))
    }
}

impl<W: Write> ViolationLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, entries: 0 }
    }

    /// Appends one timestamped report.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::LogWrite`] if the writer fails.
    pub fn record(&mut self, report: &ViolationReport<'_>) -> Result<()> {
        let body = serde_json::to_string_pretty(report)?;
        let stamp = Local::now().format(TIMESTAMP_FORMAT);

        writeln!(self.writer, "{stamp} - \n{body}").map_err(CensusError::LogWrite)?;
        self.writer.flush().map_err(CensusError::LogWrite)?;
        self.entries += 1;
        Ok(())
    }

    /// Number of reports written through this sink.
    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{CheckKind, Violation};

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn sample() -> Vec<Violation> {
        vec![Violation::cell(
            2,
            "age",
            CheckKind::OutOfRange,
            Some("150".to_owned()),
            "150 outside [0, 120]",
        )]
    }

    #[test]
    fn test_record_writes_timestamped_json() -> anyhow::Result<()> {
        let violations = sample();
        let mut log = ViolationLog::new(Vec::new());
        log.record(&ViolationReport::new("adult_income", &violations))?;
        assert_eq!(log.entries(), 1);

        let text = String::from_utf8(log.into_inner())?;
        let (header, body) = text.split_once('\n').unwrap();
        assert!(header.ends_with(" - "), "header was {header:?}");
        assert_eq!(header.len(), "2024-12-04 10:15:02,117 - ".len());

        let json: serde_json::Value = serde_json::from_str(body)?;
        assert_eq!(json["violation_count"], 1);
        assert_eq!(json["checks"]["out_of_range"][0]["failure_case"], "150");
        Ok(())
    }

    #[test]
    fn test_writer_failure_is_log_write_error() {
        let violations = sample();
        let mut log = ViolationLog::new(BrokenWriter);
        let err = log
            .record(&ViolationReport::new("adult_income", &violations))
            .unwrap_err();
        assert!(matches!(err, CensusError::LogWrite(_)));
        assert_eq!(log.entries(), 0);
    }

    #[test]
    fn test_create_truncates_previous_run() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("logs").join("validation_errors.log");

        let violations = sample();
        let mut first = ViolationLog::create(&path)?;
        first.record(&ViolationReport::new("adult_income", &violations))?;
        drop(first);
        assert!(!std::fs::read_to_string(&path)?.is_empty());

        let second = ViolationLog::create(&path)?;
        drop(second);
        assert!(std::fs::read_to_string(&path)?.is_empty());
        Ok(())
    }
}
