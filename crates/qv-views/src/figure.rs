//! Figure description passed explicitly between builders and renderers

use crate::{ChartError, ChartRenderer};

/// Paired x/y samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Pair up x and y values; both must have the same length
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, ChartError> {
        if x.len() != y.len() {
            return Err(ChartError::InvalidInput(format!(
                "x has {} values but y has {}",
                x.len(),
                y.len()
            )));
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Vertical line marking a discrete event
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalMarker {
    pub x: f64,
    pub label: String,
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,

    /// Fixed y-axis range; derived from the data when `None`
    pub y_limits: Option<(f64, f64)>,

    /// Fixed x-axis range; derived from the data when `None`
    pub x_limits: Option<(f64, f64)>,

    /// Output size in pixels
    pub size: (u32, u32),

    pub points: Vec<(f64, f64)>,
    pub markers: Vec<VerticalMarker>,
}

impl Figure {
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            y_limits: None,
            x_limits: None,
            size,
            points: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn scatter(&mut self, points: impl IntoIterator<Item = (f64, f64)>) {
        self.points.extend(points);
    }

    pub fn vertical_line(&mut self, x: f64, label: impl Into<String>) {
        self.markers.push(VerticalMarker { x, label: label.into() });
    }

    /// X range to draw: the fixed limits, else points and markers together
    pub fn x_range(&self) -> (f64, f64) {
        if let Some(limits) = self.x_limits {
            return limits;
        }
        let xs = self
            .points
            .iter()
            .map(|(x, _)| *x)
            .chain(self.markers.iter().map(|m| m.x));
        padded_range(xs)
    }

    /// Y range to draw: the fixed limits, else the points
    pub fn y_range(&self) -> (f64, f64) {
        match self.y_limits {
            Some(limits) => limits,
            None => padded_range(self.points.iter().map(|(_, y)| *y)),
        }
    }

    /// Draw this figure with a renderer (save or display)
    pub fn render_with<R: ChartRenderer + ?Sized>(&self, renderer: &R) -> Result<(), ChartError> {
        renderer.render(self)
    }
}

/// Min/max with 5% margin; a flat or empty range still gets some height
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !min.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span == 0.0 {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
        return (min - pad, max + pad);
    }
    (min - span * 0.05, max + span * 0.05)
}
