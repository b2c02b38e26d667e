pub mod csv_source;

pub use csv_source::{count_rows, read_column, read_events, CsvSource, Record};
