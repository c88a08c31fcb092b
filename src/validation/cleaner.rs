//! Validate-then-clean pass over a materialized table.

use super::audit::ViolationLog;
use super::cells::{RowKey, is_empty_row, row_keys};
use super::checks::collect_violations;
use super::violation::{Violation, ViolationReport, implicated_rows};
use crate::error::Result;
use crate::schema::TableSchema;
use polars::prelude::*;
use std::collections::{BTreeSet, HashSet};
use std::io::Write;

/// Cleaned table plus every violation found in the input.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub table: DataFrame,
    pub violations: Vec<Violation>,
    pub rows_before: usize,
}

impl CleanOutcome {
    /// True when the input needed no cleaning.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn rows_after(&self) -> usize {
        self.table.height()
    }

    pub fn rows_removed(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after())
    }

    /// Distinct input row positions named by any violation.
    pub fn implicated_rows(&self) -> BTreeSet<usize> {
        implicated_rows(&self.violations)
    }
}

/// Validates `table` against `schema` and removes every offending row.
///
/// All rules run over the whole table before anything is removed. When
/// violations exist they are written to `sink` as one timestamped report, and
/// the output is built from the original table by removing the implicated
/// rows, then duplicate rows, then all-empty rows. A table without violations
/// is returned untouched and nothing is logged.
///
/// # Errors
///
/// Fails on a malformed schema, a polars read/cast failure, or when the sink
/// cannot be written. Rule violations never produce an error.
pub fn validate_df<W: Write>(
    table: DataFrame,
    schema: &TableSchema,
    sink: &mut ViolationLog<W>,
) -> Result<CleanOutcome> {
    schema.check()?;

    let rows_before = table.height();
    let violations = collect_violations(&table, schema)?;

    if violations.is_empty() {
        log::debug!("{rows_before} rows passed schema '{}'", schema.name);
        return Ok(CleanOutcome {
            table,
            violations,
            rows_before,
        });
    }

    let report = ViolationReport::new(&schema.name, &violations);
    log::warn!(
        "{} schema violations across {} rows",
        report.violation_count,
        report.rows_implicated
    );
    sink.record(&report)?;

    let mut cleaned = remove_rows(&table, &implicated_rows(&violations))?;
    if schema.table_checks.no_duplicate_rows {
        cleaned = drop_duplicate_rows(&cleaned)?;
    }
    if schema.table_checks.no_empty_rows {
        cleaned = drop_empty_rows(&cleaned)?;
    }

    log::info!(
        "Cleaning kept {} of {rows_before} rows",
        cleaned.height()
    );

    Ok(CleanOutcome {
        table: cleaned,
        violations,
        rows_before,
    })
}

fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}

/// Drops the rows at `rows`, keeping the rest in order.
///
/// # Errors
///
/// Fails only if polars cannot apply the row mask.
pub fn remove_rows(df: &DataFrame, rows: &BTreeSet<usize>) -> Result<DataFrame> {
    if rows.is_empty() {
        return Ok(df.clone());
    }
    let keep: Vec<bool> = (0..df.height()).map(|row| !rows.contains(&row)).collect();
    filter_rows(df, &keep)
}

/// Keeps the first occurrence of every distinct row.
///
/// Rows are compared after rendering, so a null, a float NaN and a blank
/// string in the same column count as the same value. Tables from
/// [`read_raw_table`](crate::io::read_raw_table) already hold nulls only.
///
/// # Errors
///
/// Fails if a column cannot be rendered for comparison.
pub fn drop_duplicate_rows(df: &DataFrame) -> Result<DataFrame> {
    let keys = row_keys(df)?;
    let mut seen: HashSet<&RowKey> = HashSet::with_capacity(keys.len());
    let keep: Vec<bool> = keys.iter().map(|key| seen.insert(key)).collect();
    filter_rows(df, &keep)
}

/// Drops rows whose every column is null or blank.
///
/// # Errors
///
/// Fails if a column cannot be rendered for comparison.
pub fn drop_empty_rows(df: &DataFrame) -> Result<DataFrame> {
    let keys = row_keys(df)?;
    let keep: Vec<bool> = keys.iter().map(|key| !is_empty_row(key)).collect();
    filter_rows(df, &keep)
}
