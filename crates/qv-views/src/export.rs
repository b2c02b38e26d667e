//! Chart export through plotters

use std::path::{Path, PathBuf};
use once_cell::sync::OnceCell;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use tracing::{debug, info};

use crate::{ChartError, Figure};

/// Export options for charts
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output format; taken from the file extension when `None`
    pub format: Option<ExportFormat>,
    /// Output size in pixels; the figure's own size when `None`
    pub size: Option<(u32, u32)>,
    /// Include title in export
    pub include_title: bool,
    /// Include legend in export
    pub include_legend: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: None,
            size: None,
            include_title: true,
            include_legend: true,
        }
    }
}

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ChartError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ExportFormat::Png),
            "svg" => Ok(ExportFormat::Svg),
            _ => Err(ChartError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Something that can present a figure
pub trait ChartRenderer {
    fn render(&self, figure: &Figure) -> Result<(), ChartError>;
}

/// Renders figures to an image file
#[derive(Debug, Clone)]
pub struct FileRenderer {
    path: PathBuf,
    options: ExportOptions,
}

impl FileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, ExportOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: ExportOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartRenderer for FileRenderer {
    fn render(&self, figure: &Figure) -> Result<(), ChartError> {
        let format = match self.options.format {
            Some(format) => format,
            None => ExportFormat::from_path(&self.path)?,
        };
        let size = self.options.size.unwrap_or(figure.size);

        match format {
            ExportFormat::Svg => {
                let root = SVGBackend::new(&self.path, size).into_drawing_area();
                draw_figure(root, figure, &self.options)?;
            }
            ExportFormat::Png => {
                let root = BitMapBackend::new(&self.path, size).into_drawing_area();
                draw_figure(root, figure, &self.options)?;
            }
        }

        info!(
            "Rendered '{}' ({} points, {} markers) to {:?}",
            figure.title,
            figure.points.len(),
            figure.markers.len(),
            self.path
        );
        Ok(())
    }
}

/// Render a figure to an SVG document in memory
pub fn to_svg_string(figure: &Figure, options: &ExportOptions) -> Result<String, ChartError> {
    let size = options.size.unwrap_or(figure.size);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_figure(root, figure, options)?;
    }
    Ok(svg)
}

fn render_err<E: std::fmt::Display>(error: E) -> ChartError {
    ChartError::Render(error.to_string())
}

/// Family every chart text element is drawn with
const FONT_FAMILY: &str = "sans-serif";

static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Register the bundled font with plotters; runs once per process.
fn ensure_font() -> Result<(), ChartError> {
    static REGISTERED: OnceCell<Result<(), String>> = OnceCell::new();
    REGISTERED
        .get_or_init(|| {
            debug!("Registering bundled font as '{}'", FONT_FAMILY);
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES).map_err(|_| "invalid font data".to_string())
        })
        .clone()
        .map_err(ChartError::Render)
}

fn draw_figure<DB>(
    root: DrawingArea<DB, Shift>,
    figure: &Figure,
    options: &ExportOptions,
) -> Result<(), ChartError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    ensure_font()?;
    root.fill(&WHITE).map_err(render_err)?;

    let (x_min, x_max) = figure.x_range();
    let (y_min, y_max) = figure.y_range();

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40);
    if options.include_title && !figure.title.is_empty() {
        builder.caption(&figure.title, (FONT_FAMILY, 20));
    }
    let mut chart = builder
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(figure.x_label.as_str())
        .y_desc(figure.y_label.as_str())
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            figure
                .points
                .iter()
                .map(|&point| Circle::new(point, 2, BLUE.filled())),
        )
        .map_err(render_err)?;

    // Only the first marker gets a legend entry; the rest share its label.
    for (idx, marker) in figure.markers.iter().enumerate() {
        let series = chart
            .draw_series(LineSeries::new(
                vec![(marker.x, y_min), (marker.x, y_max)],
                &RED,
            ))
            .map_err(render_err)?;
        if idx == 0 && !marker.label.is_empty() {
            series
                .label(marker.label.clone())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
        }
    }

    let has_labels = figure.markers.first().map_or(false, |m| !m.label.is_empty());
    if options.include_legend && has_labels {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}
