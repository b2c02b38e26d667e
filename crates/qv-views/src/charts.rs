//! Sensor charts, with and without an event overlay
//!
//! Both builders only describe the chart; nothing is drawn or shown until
//! the returned [`Figure`] is passed to a renderer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use qv_core::{EventSet, TimeWindow};
use crate::{Figure, Series};

/// Size of the unfiltered predictor chart
pub const PREDICTOR_SIZE: (u32, u32) = (1000, 300);

/// Size of the event window chart
pub const EVENT_WINDOW_SIZE: (u32, u32) = (1000, 600);

/// Labels and limits shared by both chart kinds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Label used for event markers
    pub event_label: String,
    /// Fixed y-axis `[min, max]`
    pub y_limits: Option<(f64, f64)>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Data Title".to_string(),
            x_label: "Time".to_string(),
            y_label: "Value".to_string(),
            event_label: "Earthquake".to_string(),
            y_limits: None,
        }
    }
}

impl ChartConfig {
    fn apply(&self, figure: &mut Figure) {
        figure.title = self.title.clone();
        figure.x_label = self.x_label.clone();
        figure.y_label = self.y_label.clone();
        figure.y_limits = self.y_limits;
    }
}

/// Scatter of the whole series, for quick inspection
pub fn predictor_figure(series: &Series, config: &ChartConfig) -> Figure {
    let mut figure = Figure::new(PREDICTOR_SIZE);
    config.apply(&mut figure);
    figure.scatter(series.points());
    figure
}

/// Scatter of the samples strictly inside `window`, with a vertical marker
/// for every event strictly inside it
pub fn event_window_figure(
    series: &Series,
    events: &EventSet,
    window: &TimeWindow,
    config: &ChartConfig,
) -> Figure {
    let mut figure = Figure::new(EVENT_WINDOW_SIZE);
    config.apply(&mut figure);
    figure.x_limits = Some((window.start(), window.end()));

    figure.scatter(series.points().filter(|(x, _)| window.contains(*x)));
    for event in events.within(window) {
        figure.vertical_line(event, config.event_label.as_str());
    }

    debug!(
        "Event window [{}, {}]: {} of {} samples, {} of {} events",
        window.start(),
        window.end(),
        figure.points.len(),
        series.len(),
        figure.markers.len(),
        events.len()
    );
    figure
}
