//! Reading the raw artifact and writing the cleaned table.

use crate::error::{CensusError, Result};
use crate::schema::{ColumnKind, ColumnRule, TableSchema};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

/// Marker the upstream file uses for unknown values.
pub const MISSING_MARKER: &str = "?";

/// Reads a header-less, comma-delimited raw file into a table named by `schema`.
///
/// Blank lines are skipped, so the trailing empty line of the upstream file
/// does not become a record. Every field is read as text, trimmed, and `?`/empty fields become null.
/// Integer columns are converted to `Int64` when every present value parses;
/// otherwise the column stays textual so the validator can report each bad cell.
///
/// # Errors
///
/// Fails if the file cannot be parsed or its field count differs from the schema.
pub fn read_raw_table(path: impl AsRef<Path>, schema: &TableSchema) -> Result<DataFrame> {
    let path = path.as_ref();
    let records = without_blank_lines(&std::fs::read(path)?);
    if records.is_empty() {
        log::info!("No records in {}", path.display());
        return empty_table(schema);
    }

    let raw = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(records))
        .finish()?;

    if raw.width() != schema.columns.len() {
        return Err(CensusError::DataProcessing(format!(
            "{} has {} fields per record, expected {}",
            path.display(),
            raw.width(),
            schema.columns.len()
        )));
    }

    let columns = raw
        .get_columns()
        .iter()
        .zip(&schema.columns)
        .map(|(column, rule)| typed_column(column.as_materialized_series(), rule))
        .collect::<Result<Vec<_>>>()?;

    let table = DataFrame::new(columns)?;
    log::info!(
        "Read {} records from {}",
        table.height(),
        path.display()
    );
    Ok(table)
}

/// Drops lines holding only whitespace. A line of bare delimiters is a record.
fn without_blank_lines(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for line in bytes.split(|&b| b == b'\n') {
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    out
}

fn empty_table(schema: &TableSchema) -> Result<DataFrame> {
    let columns = schema
        .columns
        .iter()
        .map(|rule| {
            let dtype = match rule.kind {
                ColumnKind::Integer => DataType::Int64,
                ColumnKind::Text => DataType::String,
            };
            Column::from(Series::new_empty(rule.name.as_str().into(), &dtype))
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}

fn normalise_field(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != MISSING_MARKER)
        .map(str::to_owned)
}

fn typed_column(raw: &Series, rule: &ColumnRule) -> Result<Column> {
    let text = raw.cast(&DataType::String)?;
    let fields: Vec<Option<String>> = text.str()?.into_iter().map(normalise_field).collect();
    let name = PlSmallStr::from(rule.name.as_str());

    let series = match rule.kind {
        ColumnKind::Text => Series::new(name, fields),
        ColumnKind::Integer => {
            let parsed: Option<Vec<Option<i64>>> = fields
                .iter()
                .map(|field| match field {
                    None => Some(None),
                    Some(text) => text.parse::<i64>().ok().map(Some),
                })
                .collect();

            match parsed {
                Some(values) => Series::new(name, values),
                None => {
                    log::debug!(
                        "Column '{}' has non-integer values; keeping it as text",
                        rule.name
                    );
                    Series::new(name, fields)
                }
            }
        }
    };

    Ok(Column::from(series))
}

/// Writes `table` as CSV with a header row and no index column.
///
/// # Errors
///
/// Fails if the file cannot be created or written.
pub fn write_cleaned_table(table: &mut DataFrame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    CsvWriter::new(file).include_header(true).finish(table)?;
    log::info!("Cleaned data saved to {}", path.display());
    Ok(())
}
