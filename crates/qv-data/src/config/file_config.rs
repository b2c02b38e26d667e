//! File and filter configuration

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Serialize, Deserialize};
use qv_core::{BoundingBox, TimeRange};

/// Layout of a delimited text file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsvConfig {
    /// Field delimiter byte
    pub delimiter: u8,

    /// Whether the first line names the fields
    pub has_headers: bool,

    /// Allow rows with a different number of fields than the header
    pub flexible: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            flexible: false,
        }
    }
}

impl CsvConfig {
    /// Header-less tab separated layout
    pub fn tab_separated() -> Self {
        Self {
            delimiter: b'\t',
            has_headers: false,
            flexible: false,
        }
    }

    pub fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(self.flexible);
        builder
    }

    pub fn writer_builder(&self) -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder.delimiter(self.delimiter).flexible(self.flexible);
        builder
    }
}

/// What the region/time filter does with a row it cannot parse
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BadRowPolicy {
    /// Stop at the first bad row and return the error
    #[default]
    Abort,
    /// Drop the row, count it and keep going
    Skip,
}

/// Region/time filter settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Layout of both input and output
    pub csv: CsvConfig,

    /// Closed time range on the `timestamp` field
    pub time_range: TimeRange,

    /// Region on the `lat`/`long` fields
    pub bounding_box: BoundingBox,

    /// Handling of malformed rows
    pub bad_rows: BadRowPolicy,
}
