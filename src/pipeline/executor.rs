//! End-to-end `read_and_validate` run.
//!
//! Validates the raw artifact, reads it, cleans it against the schema and
//! writes the cleaned CSV, producing a [`RunReport`].

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::io::{read_raw_table, write_cleaned_table};
use crate::raw_file::validate_raw_file;
use crate::utils::prepare_output_path;
use crate::validation::{ViolationLog, validate_df};
use std::path::PathBuf;

/// Report generated after a cleaning run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of rows read from the raw file
    pub rows_before: usize,

    /// Number of rows written to the cleaned file
    pub rows_after: usize,

    /// Total violations found (cell and row level)
    pub violations: usize,

    /// Distinct rows named by any violation
    pub rows_implicated: usize,

    pub output_path: PathBuf,

    pub log_path: PathBuf,

    /// Time taken for execution
    pub duration: std::time::Duration,
}

impl RunReport {
    /// Create a summary message
    pub fn summary(&self) -> String {
        format!(
            "Cleaning completed: {} → {} rows ({} removed), {} violations on {} rows, {:.2}s",
            self.rows_before,
            self.rows_after,
            self.rows_before.saturating_sub(self.rows_after),
            self.violations,
            self.rows_implicated,
            self.duration.as_secs_f64()
        )
    }

    pub fn is_clean(&self) -> bool {
        self.violations == 0
    }
}

/// Reads, validates and cleans the raw file named by `config`.
///
/// The validation log at `config.log_path` is truncated at the start of the
/// run and receives one entry if any violations were found.
///
/// # Errors
///
/// Fails fast with `NotFound`/`FormatMismatch` before reading anything;
/// otherwise fails on schema, read, log or write errors. Schema violations in
/// the data never fail the run.
pub fn read_and_validate(config: &PipelineConfig) -> Result<RunReport> {
    let start = std::time::Instant::now();

    validate_raw_file(&config.raw_path)?;
    log::info!("Data Validation 1 passed: file existence and format verified");

    let schema = config.load_schema()?;
    let table = read_raw_table(&config.raw_path, &schema)?;

    let mut sink = ViolationLog::create(&config.log_path)?;
    let outcome = validate_df(table, &schema, &mut sink)?;
    log::info!(
        "Data Validation 2 passed: {} violations, {} rows kept",
        outcome.violations.len(),
        outcome.rows_after()
    );

    let output_path = prepare_output_path(&config.processed_dir, &config.output_file_name)?;
    let rows_implicated = outcome.implicated_rows().len();
    let violations = outcome.violations.len();
    let rows_before = outcome.rows_before;
    let mut table = outcome.table;
    write_cleaned_table(&mut table, &output_path)?;

    Ok(RunReport {
        rows_before,
        rows_after: table.height(),
        violations,
        rows_implicated,
        output_path,
        log_path: config.log_path.clone(),
        duration: start.elapsed(),
    })
}
