//! Region/time filtering of event catalogs
//!
//! Streams a catalog with `timestamp`, `lat` and `long` columns and keeps
//! the rows inside a closed time range and a bounding box. Rows are copied
//! through byte-for-byte under the input header.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::{BadRowPolicy, FilterConfig};
use crate::fields::parse_field;
use crate::sources::{CsvSource, Record};
use crate::DataError;

pub const TIMESTAMP_FIELD: &str = "timestamp";
pub const LAT_FIELD: &str = "lat";
pub const LONG_FIELD: &str = "long";

/// Outcome of a filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterResult {
    pub rows_read: usize,
    pub rows_written: usize,
    /// Rows dropped as malformed (only with [`BadRowPolicy::Skip`])
    pub rows_skipped: usize,
}

/// Keeps catalog rows inside a time range and a region
#[derive(Debug, Clone, Default)]
pub struct RegionTimeFilter {
    config: FilterConfig,
}

impl RegionTimeFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter `input` into `output`; both files are closed on every path.
    pub fn run_files(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<FilterResult, DataError> {
        let input = input.as_ref();
        let output = output.as_ref();
        info!("Filtering {:?} into {:?}", input, output);

        let reader = File::open(input)?;
        let writer = File::create(output)?;
        self.run(reader, writer)
    }

    /// Filter any reader into any writer
    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<FilterResult, DataError> {
        let mut source = CsvSource::from_reader(input, &self.config.csv)?;
        source.require_columns(&[TIMESTAMP_FIELD, LAT_FIELD, LONG_FIELD])?;

        let mut writer = self.config.csv.writer_builder().from_writer(output);
        writer.write_record(source.headers())?;

        let mut result = FilterResult::default();
        for record in source.records() {
            result.rows_read += 1;

            match record.and_then(|record| Ok((self.matches(&record)?, record))) {
                Ok((true, record)) => {
                    writer.write_record(record.raw())?;
                    result.rows_written += 1;
                }
                Ok((false, _)) => {}
                Err(e) if self.skips(&e) => {
                    warn!("Skipping row {}: {}", result.rows_read, e);
                    result.rows_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        writer.flush()?;
        info!(
            "Kept {} of {} rows ({} skipped)",
            result.rows_written, result.rows_read, result.rows_skipped
        );
        Ok(result)
    }

    /// I/O failures always abort; anything wrong with the row itself only
    /// aborts under [`BadRowPolicy::Abort`].
    fn skips(&self, error: &DataError) -> bool {
        self.config.bad_rows == BadRowPolicy::Skip && !matches!(error, DataError::Io(_))
    }

    /// Time check first; coordinates are only parsed for rows in range.
    fn matches(&self, record: &Record) -> Result<bool, DataError> {
        let timestamp: i64 = parse_field(record, TIMESTAMP_FIELD)?;
        if !self.config.time_range.contains(timestamp) {
            return Ok(false);
        }

        let lat: f64 = parse_field(record, LAT_FIELD)?;
        let long: f64 = parse_field(record, LONG_FIELD)?;
        let inside = self.config.bounding_box.contains(lat, long);
        debug!("Row at {} ({}, {}) inside={}", timestamp, lat, long, inside);
        Ok(inside)
    }
}
