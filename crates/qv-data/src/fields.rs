//! Typed access to record fields

use std::str::FromStr;

use crate::config::NullConfig;
use crate::sources::Record;
use crate::DataError;

/// Read a numeric field for analysis: a missing cell reads as 0.0.
///
/// "Missing" is decided by `nulls` (by default only the empty string).
/// Any other text must parse as a float.
pub fn extract_numeric(record: &Record, field: &str, nulls: &NullConfig) -> Result<f64, DataError> {
    let value = record
        .get(field)
        .ok_or_else(|| DataError::Schema(field.to_string()))?;

    if nulls.is_null(value) {
        return Ok(0.0);
    }

    parse_value(field, value)
}

/// Strictly parse a field; blank cells are errors here.
pub fn parse_field<T: FromStr>(record: &Record, field: &str) -> Result<T, DataError> {
    let value = record
        .get(field)
        .ok_or_else(|| DataError::Schema(field.to_string()))?;
    parse_value(field, value)
}

fn parse_value<T: FromStr>(field: &str, value: &str) -> Result<T, DataError> {
    value.trim().parse::<T>().map_err(|_| DataError::Parse {
        field: field.to_string(),
        value: value.to_string(),
    })
}
