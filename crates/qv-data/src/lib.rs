//! Data handling for sensor series and event catalogs
//!
//! Reading delimited files, pulling numbers out of records, filling gaps in
//! sensor series and cutting an event catalog down to a time range and
//! region.

pub mod config;
pub mod fields;
pub mod filter;
pub mod gaps;
pub mod sources;

use qv_core::CoreError;
use thiserror::Error;

// Re-exports
pub use config::{BadRowPolicy, CsvConfig, FilterConfig, NullConfig};
pub use fields::extract_numeric;
pub use filter::{FilterResult, RegionTimeFilter};
pub use gaps::{fill_gaps, fill_missing_data};
pub use sources::{count_rows, read_column, read_events, CsvSource, Record};

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Cannot parse field '{field}' value '{value}' as a number")]
    Parse { field: String, value: String },

    #[error("Missing required column '{0}'")]
    Schema(String),

    #[error("Need at least 2 known samples to interpolate, found {found}")]
    InsufficientData { found: usize },

    #[error("Sample {index} is missing and lies outside the interpolation range")]
    OutOfDomain { index: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}

impl From<CoreError> for DataError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(msg) => DataError::InvalidInput(msg),
        }
    }
}
