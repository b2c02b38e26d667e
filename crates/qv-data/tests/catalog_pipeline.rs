//! End-to-end checks over real files: catalog filtering and series loading.

use std::fs;
use std::io::Write;

use qv_core::{BoundingBox, TimeRange};
use qv_data::{
    count_rows, fill_missing_data, read_column, read_events, CsvConfig, DataError, FilterConfig,
    NullConfig, RegionTimeFilter,
};
use tempfile::TempDir;

const CATALOG: &str = "\
timestamp,lat,long,depth,mag
1400000000,34.05,-118.25,10.0,4.2
1420000000,37.77,-122.42,8.1,5.1
1440000000,35.68,139.69,30.0,6.3
1460000000,34.10,-117.90,12.5,3.9
";

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_filter_catalog_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "catalog.csv", CATALOG);
    let output = dir.path().join("california.csv");

    let filter = RegionTimeFilter::new(FilterConfig {
        time_range: TimeRange::new(1_450_000_000, 1_390_000_000),
        bounding_box: BoundingBox::from_corners((42.0, -125.0), (32.0, -114.0)),
        ..FilterConfig::default()
    });
    let result = filter.run_files(&input, &output).unwrap();
    assert_eq!(result.rows_written, 2);

    let written = fs::read_to_string(&output).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), CATALOG.lines().next());
    assert_eq!(lines.next(), Some("1400000000,34.05,-118.25,10.0,4.2"));
    assert_eq!(lines.next(), Some("1420000000,37.77,-122.42,8.1,5.1"));
    assert_eq!(lines.next(), None);

    assert_eq!(count_rows(&output, &CsvConfig::default()).unwrap(), 2);

    let events = read_events(&output, "timestamp", &CsvConfig::default()).unwrap();
    assert_eq!(events.timestamps(), &[1_400_000_000.0, 1_420_000_000.0]);
}

#[test]
fn test_filter_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = RegionTimeFilter::default()
        .run_files(dir.path().join("absent.csv"), dir.path().join("out.csv"))
        .unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}

#[test]
fn test_default_filter_drops_rows_after_2016() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "catalog.csv", CATALOG);
    let output = dir.path().join("out.csv");

    let result = RegionTimeFilter::default().run_files(&input, &output).unwrap();
    assert_eq!(result.rows_read, 4);
    assert_eq!(result.rows_written, 3);
}

#[test]
fn test_sensor_series_gap_fill() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "radon.csv",
        "timestamp,radon\n0,10\n3600,\n7200,14\n10800,\n14400,\n18000,20\n",
    );

    let raw = read_column(&input, "radon", &CsvConfig::default(), &NullConfig::default()).unwrap();
    assert_eq!(raw, vec![10.0, 0.0, 14.0, 0.0, 0.0, 20.0]);

    let filled = fill_missing_data(&raw).unwrap();
    assert_eq!(filled, vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0]);
}
