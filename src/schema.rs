//! Column rules for the census table.
//!
//! A [`TableSchema`] is plain data: an ordered list of [`ColumnRule`]s plus the
//! table-level checks. The traversal in [`crate::validation`] never branches on
//! column names, so a different rule set can be swapped in from JSON.
//!
//! ```
//! use census_clean::schema::TableSchema;
//!
//! let schema = TableSchema::adult_income();
//! assert_eq!(schema.columns.len(), 15);
//! assert_eq!(schema.column_names()[0], "age");
//! ```

mod adult;

use crate::error::{CensusError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Primitive type a column is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Integer,
    Text,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Text => "text",
        }
    }
}

/// Inclusive integer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Domain rule for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRule {
    pub name: String,
    pub kind: ColumnKind,

    /// Only meaningful for integer columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ValueRange>,

    /// Closed enumeration; only meaningful for text columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,

    #[serde(default = "default_true")]
    pub nullable: bool,
}

impl ColumnRule {
    /// Nullable integer column without bounds.
    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Integer,
            range: None,
            allowed_values: None,
            nullable: true,
        }
    }

    /// Nullable text column without an enumeration.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Text,
            range: None,
            allowed_values: None,
            nullable: true,
        }
    }

    #[must_use]
    pub fn between(mut self, min: i64, max: i64) -> Self {
        self.range = Some(ValueRange::new(min, max));
        self
    }

    #[must_use]
    pub fn one_of(mut self, values: &[&str]) -> Self {
        self.allowed_values = Some(values.iter().map(|v| (*v).to_owned()).collect());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// Checks evaluated across whole rows rather than single cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableChecks {
    #[serde(default = "default_true")]
    pub no_duplicate_rows: bool,
    #[serde(default = "default_true")]
    pub no_empty_rows: bool,
}

impl Default for TableChecks {
    fn default() -> Self {
        Self {
            no_duplicate_rows: true,
            no_empty_rows: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Ordered column rules plus table-level checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnRule>,
    #[serde(default)]
    pub table_checks: TableChecks,
}

impl TableSchema {
    /// Rules for the UCI adult census-income dataset.
    pub fn adult_income() -> Self {
        adult::schema()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn rule(&self, name: &str) -> Option<&ColumnRule> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Rejects rule sets that cannot be evaluated meaningfully.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Schema`] on the first malformed rule found.
    pub fn check(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(CensusError::Schema(format!(
                "schema '{}' declares no columns",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        for rule in &self.columns {
            if rule.name.trim().is_empty() {
                return Err(CensusError::Schema("column with empty name".to_owned()));
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(CensusError::Schema(format!(
                    "column '{}' declared twice",
                    rule.name
                )));
            }

            match rule.kind {
                ColumnKind::Integer => {
                    if rule.allowed_values.is_some() {
                        return Err(CensusError::Schema(format!(
                            "integer column '{}' cannot have allowed_values",
                            rule.name
                        )));
                    }
                    if let Some(range) = rule.range
                        && range.min > range.max
                    {
                        return Err(CensusError::Schema(format!(
                            "column '{}' has inverted range [{}, {}]",
                            rule.name, range.min, range.max
                        )));
                    }
                }
                ColumnKind::Text => {
                    if rule.range.is_some() {
                        return Err(CensusError::Schema(format!(
                            "text column '{}' cannot have a numeric range",
                            rule.name
                        )));
                    }
                    if rule.allowed_values.as_ref().is_some_and(Vec::is_empty) {
                        return Err(CensusError::Schema(format!(
                            "column '{}' has an empty allowed_values set",
                            rule.name
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Load a schema from a JSON file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid JSON, or is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Parse a schema from a JSON string
    ///
    /// # Errors
    ///
    /// Fails if the JSON does not describe a well-formed schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: Self = serde_json::from_str(json)?;
        schema.check()?;
        Ok(schema)
    }

    /// Serialize the schema to pretty JSON
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the schema to a JSON file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).context("Failed to write schema file")
    }
}
