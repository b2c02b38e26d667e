//! Command implementations behind the CLI

use std::path::PathBuf;
use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use tracing::info;

use qv_core::{datetime_to_timestamp, BoundingBox, EventSet, TimeRange, TimeWindow, Zone};
use qv_data::{
    count_rows, fill_missing_data, read_column, read_events, BadRowPolicy, CsvConfig,
    FilterResult, RegionTimeFilter,
};
use qv_views::{event_window_figure, predictor_figure, FileRenderer, Series};

use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Catalog to read (needs timestamp, lat and long columns)
    #[arg(short, long)]
    pub input: PathBuf,

    /// File to write the matching rows to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Range start (UNIX seconds)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Range end (UNIX seconds)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub north: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub south: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub east: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub west: Option<f64>,

    /// Drop malformed rows instead of stopping
    #[arg(long)]
    pub skip_bad_rows: bool,
}

#[derive(Args, Debug)]
pub struct CountArgs {
    #[arg(short, long)]
    pub input: PathBuf,

    /// Input is tab separated without a header line
    #[arg(long)]
    pub tab_separated: bool,
}

#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Sensor file to plot
    #[arg(short, long)]
    pub input: PathBuf,

    /// Image to write (.svg or .png)
    #[arg(short, long)]
    pub output: PathBuf,

    #[arg(long, default_value = "timestamp")]
    pub x_field: String,

    #[arg(long)]
    pub y_field: String,

    /// Interpolate blank/zero readings before plotting
    #[arg(long)]
    pub fill_gaps: bool,

    /// Event catalog to overlay; enables window clipping
    #[arg(long)]
    pub events: Option<PathBuf>,

    #[arg(long, default_value = "timestamp")]
    pub event_field: String,

    /// Window center (UNIX seconds)
    #[arg(long, allow_negative_numbers = true)]
    pub center: Option<f64>,

    #[arg(long)]
    pub days_before: Option<f64>,

    #[arg(long)]
    pub days_after: Option<f64>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub x_label: Option<String>,

    #[arg(long)]
    pub y_label: Option<String>,

    #[arg(long)]
    pub event_label: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,
}

#[derive(Args, Debug)]
pub struct TimestampArgs {
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`
    #[arg(long)]
    pub date: String,

    /// Interpret the date in the local time zone instead of UTC
    #[arg(long)]
    pub local: bool,
}

pub fn run_filter(args: &FilterArgs, config: &AppConfig) -> Result<FilterResult> {
    let mut filter_config = config.filter.clone();

    let range = filter_config.time_range;
    filter_config.time_range = TimeRange::new(
        args.start.unwrap_or(range.start),
        args.end.unwrap_or(range.end),
    );

    let bbox = filter_config.bounding_box;
    filter_config.bounding_box = BoundingBox::new(
        args.north.unwrap_or(bbox.north),
        args.south.unwrap_or(bbox.south),
        args.east.unwrap_or(bbox.east),
        args.west.unwrap_or(bbox.west),
    );

    if args.skip_bad_rows {
        filter_config.bad_rows = BadRowPolicy::Skip;
    }

    let result = RegionTimeFilter::new(filter_config)
        .run_files(&args.input, &args.output)
        .with_context(|| format!("Filtering {} failed", args.input.display()))?;
    Ok(result)
}

pub fn run_count(args: &CountArgs) -> Result<usize> {
    let csv = if args.tab_separated {
        CsvConfig::tab_separated()
    } else {
        CsvConfig::default()
    };
    Ok(count_rows(&args.input, &csv)?)
}

/// Build and save a chart; returns the number of plotted samples
pub fn run_plot(args: &PlotArgs, config: &AppConfig) -> Result<usize> {
    let settings = &config.plot;

    let mut chart = settings.chart.clone();
    if let Some(title) = &args.title {
        chart.title = title.clone();
    }
    if let Some(label) = &args.x_label {
        chart.x_label = label.clone();
    }
    if let Some(label) = &args.y_label {
        chart.y_label = label.clone();
    }
    if let Some(label) = &args.event_label {
        chart.event_label = label.clone();
    }
    match (args.y_min, args.y_max) {
        (Some(min), Some(max)) => chart.y_limits = Some((min, max)),
        (None, None) => {}
        _ => bail!("--y-min and --y-max must be given together"),
    }

    let x = read_column(&args.input, &args.x_field, &settings.csv, &settings.nulls)?;
    let mut y = read_column(&args.input, &args.y_field, &settings.csv, &settings.nulls)?;
    if args.fill_gaps {
        y = fill_missing_data(&y).with_context(|| format!("Cannot fill gaps in '{}'", args.y_field))?;
    }
    let series = Series::new(x, y)?;

    let figure = match &args.events {
        Some(path) => {
            let events: EventSet = read_events(path, &args.event_field, &settings.csv)?;
            let window = TimeWindow::new(
                args.center.unwrap_or(settings.window.center),
                args.days_before.unwrap_or(settings.window.days_before),
                args.days_after.unwrap_or(settings.window.days_after),
            );
            event_window_figure(&series, &events, &window, &chart)
        }
        None => predictor_figure(&series, &chart),
    };

    figure.render_with(&FileRenderer::new(&args.output))?;
    info!("Wrote {} samples to {:?}", figure.points.len(), args.output);
    Ok(figure.points.len())
}

pub fn run_timestamp(args: &TimestampArgs) -> Result<i64> {
    let date_time = parse_date(&args.date)?;
    let zone = if args.local { Zone::Local } else { Zone::Utc };
    Ok(datetime_to_timestamp(date_time, zone)?)
}

fn parse_date(text: &str) -> Result<NaiveDateTime> {
    if let Ok(date_time) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Ok(date_time);
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("Unrecognised date '{}'", text))?;
    date.and_hms_opt(0, 0, 0)
        .with_context(|| format!("Unrecognised date '{}'", text))
}
