//! Chart building for sensor series with event overlays
//!
//! Charts are built as plain [`Figure`] values and only touch a backend
//! when handed to a [`ChartRenderer`].

pub mod charts;
pub mod export;
pub mod figure;

use thiserror::Error;
use qv_core::CoreError;

pub use charts::{event_window_figure, predictor_figure, ChartConfig};
pub use export::{to_svg_string, ChartRenderer, ExportFormat, ExportOptions, FileRenderer};
pub use figure::{Figure, Series, VerticalMarker};

/// Errors that can occur while building or rendering charts
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for ChartError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(msg) => ChartError::InvalidInput(msg),
        }
    }
}
