use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use ahash::AHashMap;
use csv::{Reader, StringRecord};
use tracing::{debug, info};

use qv_core::EventSet;
use crate::config::{CsvConfig, NullConfig};
use crate::fields::extract_numeric;
use crate::DataError;

/// Column name to position lookup shared by every record of a source
type ColumnIndex = Arc<AHashMap<String, usize>>;

/// One row of a delimited file, addressable by field name
#[derive(Debug, Clone)]
pub struct Record {
    values: StringRecord,
    columns: ColumnIndex,
}

impl Record {
    /// Raw text of a field, `None` when the file has no such column
    pub fn get(&self, field: &str) -> Option<&str> {
        self.columns
            .get(field)
            .and_then(|&idx| self.values.get(idx))
    }

    /// The row exactly as it was read
    pub fn raw(&self) -> &StringRecord {
        &self.values
    }
}

/// Streaming reader over a delimited file
pub struct CsvSource<R> {
    reader: Reader<R>,
    headers: StringRecord,
    columns: ColumnIndex,
}

impl CsvSource<File> {
    /// Open a file for streaming
    pub fn open(path: impl AsRef<Path>, config: &CsvConfig) -> Result<Self, DataError> {
        let path = path.as_ref();
        debug!("Opening {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(file, config)
    }
}

impl<R: Read> CsvSource<R> {
    /// Wrap any reader; the header line is consumed here when configured
    pub fn from_reader(reader: R, config: &CsvConfig) -> Result<Self, DataError> {
        let mut reader = config.reader_builder().from_reader(reader);

        let headers = if config.has_headers {
            reader.headers()?.clone()
        } else {
            StringRecord::new()
        };

        let columns = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), idx))
            .collect::<AHashMap<_, _>>();

        Ok(Self {
            reader,
            headers,
            columns: Arc::new(columns),
        })
    }

    /// Field names in file order (empty for header-less files)
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn has_column(&self, field: &str) -> bool {
        self.columns.contains_key(field)
    }

    /// Fail with a schema error unless every field is present
    pub fn require_columns(&self, fields: &[&str]) -> Result<(), DataError> {
        match fields.iter().find(|f| !self.has_column(f)) {
            Some(missing) => Err(DataError::Schema(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Records one at a time
    pub fn records(&mut self) -> impl Iterator<Item = Result<Record, DataError>> + '_ {
        let columns = self.columns.clone();
        self.reader.records().map(move |result| {
            result
                .map(|values| Record {
                    values,
                    columns: columns.clone(),
                })
                .map_err(DataError::from)
        })
    }
}

/// Number of data rows in a file (header line excluded when configured)
pub fn count_rows(path: impl AsRef<Path>, config: &CsvConfig) -> Result<usize, DataError> {
    let mut source = CsvSource::open(path.as_ref(), config)?;
    let mut row_count = 0;
    for record in source.records() {
        record?;
        row_count += 1;
    }
    info!("Counted {} rows in {:?}", row_count, path.as_ref());
    Ok(row_count)
}

/// Load one numeric column, blank cells become the 0.0 missing sentinel
pub fn read_column(
    path: impl AsRef<Path>,
    field: &str,
    config: &CsvConfig,
    nulls: &NullConfig,
) -> Result<Vec<f64>, DataError> {
    let mut source = CsvSource::open(path.as_ref(), config)?;
    source.require_columns(&[field])?;

    let mut values = Vec::new();
    for record in source.records() {
        values.push(extract_numeric(&record?, field, nulls)?);
    }
    debug!("Read {} values of '{}' from {:?}", values.len(), field, path.as_ref());
    Ok(values)
}

/// Load event timestamps from one column; every cell must be numeric
pub fn read_events(
    path: impl AsRef<Path>,
    field: &str,
    config: &CsvConfig,
) -> Result<EventSet, DataError> {
    let mut source = CsvSource::open(path.as_ref(), config)?;
    source.require_columns(&[field])?;

    let mut raw = Vec::new();
    for record in source.records() {
        let record = record?;
        raw.push(record.get(field).unwrap_or_default().to_string());
    }
    let events = EventSet::parse(raw.iter().map(String::as_str))?;
    info!("Loaded {} events from {:?}", events.len(), path.as_ref());
    Ok(events)
}
