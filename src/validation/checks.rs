//! Exhaustive rule evaluation.
//!
//! Every column rule and every table-level check runs over the whole table.
//! Nothing short-circuits: the caller gets the complete violation set.

use super::cells::{IntegerCell, RowKey, integer_cells, is_empty_row, row_keys, text_cells};
use super::violation::{CheckKind, Violation};
use crate::error::Result;
use crate::schema::{ColumnKind, ColumnRule, TableSchema};
use polars::prelude::*;
use std::collections::{HashMap, HashSet};

/// Runs every rule in `schema` against `df` and returns all violations.
///
/// Violations come out in rule order: column rules in schema order, then
/// duplicate rows, then empty rows.
///
/// # Errors
///
/// Only fails if a column cannot be read or cast; rule breaches are returned
/// as data.
pub fn collect_violations(df: &DataFrame, schema: &TableSchema) -> Result<Vec<Violation>> {
    let mut violations = Vec::new();

    for rule in &schema.columns {
        match df.column(&rule.name) {
            Ok(column) => check_column(rule, column.as_materialized_series(), &mut violations)?,
            Err(_) => violations.push(Violation::column(
                &rule.name,
                CheckKind::ColumnMissing,
                format!("column '{}' not in table", rule.name),
            )),
        }
    }

    let checks = schema.table_checks;
    if df.height() > 0 && (checks.no_duplicate_rows || checks.no_empty_rows) {
        let keys = row_keys(df)?;
        if checks.no_duplicate_rows {
            check_duplicate_rows(&keys, &mut violations);
        }
        if checks.no_empty_rows {
            check_empty_rows(&keys, &mut violations);
        }
    }

    Ok(violations)
}

fn check_column(rule: &ColumnRule, series: &Series, out: &mut Vec<Violation>) -> Result<()> {
    match rule.kind {
        ColumnKind::Integer => check_integer_column(rule, series, out),
        ColumnKind::Text => check_text_column(rule, series, out),
    }
}

fn missing_value(rule: &ColumnRule, row: usize, out: &mut Vec<Violation>) {
    if !rule.nullable {
        out.push(Violation::cell(
            row,
            &rule.name,
            CheckKind::NotNullable,
            None,
            "missing value in non-nullable column",
        ));
    }
}

fn check_integer_column(rule: &ColumnRule, series: &Series, out: &mut Vec<Violation>) -> Result<()> {
    for (row, cell) in integer_cells(series)?.into_iter().enumerate() {
        match cell {
            IntegerCell::Missing => missing_value(rule, row, out),
            IntegerCell::Invalid(raw) => {
                let reason = format!("expected {}, found '{raw}'", rule.kind.as_str());
                out.push(Violation::cell(
                    row,
                    &rule.name,
                    CheckKind::WrongType,
                    Some(raw),
                    reason,
                ));
            }
            IntegerCell::Value(value) => {
                if let Some(range) = rule.range
                    && !range.contains(value)
                {
                    out.push(Violation::cell(
                        row,
                        &rule.name,
                        CheckKind::OutOfRange,
                        Some(value.to_string()),
                        format!("{value} outside [{}, {}]", range.min, range.max),
                    ));
                }
            }
        }
    }
    Ok(())
}

fn check_text_column(rule: &ColumnRule, series: &Series, out: &mut Vec<Violation>) -> Result<()> {
    let allowed: Option<HashSet<&str>> = rule
        .allowed_values
        .as_ref()
        .map(|values| values.iter().map(String::as_str).collect());

    for (row, cell) in text_cells(series)?.into_iter().enumerate() {
        match cell {
            None => missing_value(rule, row, out),
            Some(value) => {
                if let Some(allowed) = &allowed
                    && !allowed.contains(value.as_str())
                {
                    let reason = format!("'{value}' is not an allowed {} value", rule.name);
                    out.push(Violation::cell(
                        row,
                        &rule.name,
                        CheckKind::NotInSet,
                        Some(value),
                        reason,
                    ));
                }
            }
        }
    }
    Ok(())
}

/// Flags every row identical to an earlier one; the first occurrence stays clean.
fn check_duplicate_rows(keys: &[RowKey], out: &mut Vec<Violation>) {
    let mut first_seen: HashMap<&RowKey, usize> = HashMap::with_capacity(keys.len());
    for (row, key) in keys.iter().enumerate() {
        match first_seen.get(key) {
            Some(&first) => out.push(Violation::row(
                row,
                CheckKind::DuplicateRow,
                format!("duplicate of row {first}"),
            )),
            None => {
                first_seen.insert(key, row);
            }
        }
    }
}

fn check_empty_rows(keys: &[RowKey], out: &mut Vec<Violation>) {
    for (row, key) in keys.iter().enumerate() {
        if is_empty_row(key) {
            out.push(Violation::row(
                row,
                CheckKind::EmptyRow,
                "every column is empty",
            ));
        }
    }
}
