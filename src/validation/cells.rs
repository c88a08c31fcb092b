//! Typed per-cell views over polars columns.
//!
//! The validator accepts tables straight from the raw reader (text or `Int64`
//! columns) as well as frames built elsewhere, where an integer column holding
//! nulls may have been widened to floats. These helpers flatten every case into
//! one cell representation per rule kind.

use crate::error::Result;
use polars::prelude::*;

/// One cell of an integer-typed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IntegerCell {
    Missing,
    Value(i64),
    /// Present but not an integer; holds the raw text
    Invalid(String),
}

/// Row contents rendered as text, used for equality and emptiness checks.
pub(crate) type RowKey = Vec<Option<String>>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn float_to_integer(value: f64) -> IntegerCell {
    if value.is_nan() {
        IntegerCell::Missing
    } else if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        IntegerCell::Value(value as i64)
    } else {
        IntegerCell::Invalid(value.to_string())
    }
}

pub(crate) fn integer_cells(series: &Series) -> Result<Vec<IntegerCell>> {
    let dtype = series.dtype();

    if dtype.is_integer() {
        let cast = series.cast(&DataType::Int64)?;
        return Ok(cast
            .i64()?
            .into_iter()
            .map(|v| v.map_or(IntegerCell::Missing, IntegerCell::Value))
            .collect());
    }

    if dtype.is_float() {
        let cast = series.cast(&DataType::Float64)?;
        return Ok(cast
            .f64()?
            .into_iter()
            .map(|v| v.map_or(IntegerCell::Missing, float_to_integer))
            .collect());
    }

    let text = series.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|v| match v.map(str::trim) {
            None | Some("") => IntegerCell::Missing,
            Some(raw) => raw
                .parse::<i64>()
                .map_or_else(|_| IntegerCell::Invalid(raw.to_owned()), IntegerCell::Value),
        })
        .collect())
}

/// Text cells; nulls, float NaNs and blank strings count as missing.
pub(crate) fn text_cells(series: &Series) -> Result<Vec<Option<String>>> {
    if series.dtype().is_float() {
        let cast = series.cast(&DataType::Float64)?;
        return Ok(cast
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()).map(|x| x.to_string()))
            .collect());
    }

    let text = series.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|v| v.filter(|s| !is_blank(s)).map(str::to_owned))
        .collect())
}

/// Renders every row of `df` across all of its columns.
///
/// Cells are rendered by [`text_cells`], so rows that differ only in how a
/// missing value was spelled compare equal.
pub(crate) fn row_keys(df: &DataFrame) -> Result<Vec<RowKey>> {
    let mut keys: Vec<RowKey> = vec![Vec::with_capacity(df.width()); df.height()];

    for column in df.get_columns() {
        let rendered = text_cells(column.as_materialized_series())?;
        for (key, value) in keys.iter_mut().zip(rendered) {
            key.push(value);
        }
    }

    Ok(keys)
}

pub(crate) fn is_empty_row(key: &RowKey) -> bool {
    key.iter().all(Option::is_none)
}
