//! Violation records and the report written to the validation log.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Which rule a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// A schema column is absent from the table
    ColumnMissing,
    /// Cell cannot be read as the declared type
    WrongType,
    /// Null in a column declared non-nullable
    NotNullable,
    /// Integer outside its inclusive range
    OutOfRange,
    /// Text outside its closed enumeration
    NotInSet,
    /// Row identical to an earlier row
    DuplicateRow,
    /// Every column of the row is empty
    EmptyRow,
}

impl CheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ColumnMissing => "column_missing",
            Self::WrongType => "wrong_type",
            Self::NotNullable => "not_nullable",
            Self::OutOfRange => "out_of_range",
            Self::NotInSet => "not_in_set",
            Self::DuplicateRow => "duplicate_row",
            Self::EmptyRow => "empty_row",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single breach of a column or table-level rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Row position in the validated table; `None` for whole-table problems
    pub row: Option<usize>,
    pub column: Option<String>,
    pub check: CheckKind,
    /// Offending value rendered as text
    pub failure_case: Option<String>,
    pub reason: String,
}

impl Violation {
    pub fn cell(
        row: usize,
        column: impl Into<String>,
        check: CheckKind,
        failure_case: Option<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            row: Some(row),
            column: Some(column.into()),
            check,
            failure_case,
            reason: reason.into(),
        }
    }

    pub fn row(row: usize, check: CheckKind, reason: impl Into<String>) -> Self {
        Self {
            row: Some(row),
            column: None,
            check,
            failure_case: None,
            reason: reason.into(),
        }
    }

    pub fn column(column: impl Into<String>, check: CheckKind, reason: impl Into<String>) -> Self {
        Self {
            row: None,
            column: Some(column.into()),
            check,
            failure_case: None,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.row, &self.column) {
            (Some(row), Some(column)) => write!(f, "row {row}, column '{column}': "),
            (Some(row), None) => write!(f, "row {row}: "),
            (None, Some(column)) => write!(f, "column '{column}': "),
            (None, None) => Ok(()),
        }?;
        write!(f, "{} ({})", self.reason, self.check)
    }
}

/// Distinct row positions named by any violation.
pub fn implicated_rows(violations: &[Violation]) -> BTreeSet<usize> {
    violations.iter().filter_map(|v| v.row).collect()
}

/// Serializable summary of one validation pass, grouped by check.
#[derive(Debug, Serialize)]
pub struct ViolationReport<'a> {
    pub schema: &'a str,
    pub violation_count: usize,
    pub rows_implicated: usize,
    pub checks: BTreeMap<CheckKind, Vec<&'a Violation>>,
}

impl<'a> ViolationReport<'a> {
    pub fn new(schema: &'a str, violations: &'a [Violation]) -> Self {
        let mut checks: BTreeMap<CheckKind, Vec<&'a Violation>> = BTreeMap::new();
        for violation in violations {
            checks.entry(violation.check).or_default().push(violation);
        }

        Self {
            schema,
            violation_count: violations.len(),
            rows_implicated: implicated_rows(violations).len(),
            checks,
        }
    }
}
