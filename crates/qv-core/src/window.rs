//! Time and region predicates
//!
//! Two window flavours live here with different boundary rules:
//! [`TimeRange`] is closed (`start <= t <= end`) and drives record
//! filtering, while [`TimeWindow`] is open (`start < t < end`) and drives
//! chart clipping.

use serde::{Deserialize, Serialize};

/// Seconds in one day, used to turn window offsets into epoch deltas
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// 1898-06-28T00:00:00Z
pub const DEFAULT_RANGE_START: i64 = -2_256_681_600;

/// 2016-02-03T00:00:00Z
pub const DEFAULT_RANGE_END: i64 = 1_454_457_600;

/// Closed range of UNIX timestamps
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RangeBounds")]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    /// Create a range from two bounds given in any order
    pub fn new(a: i64, b: i64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Check whether a timestamp lies inside the range, bounds included
    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

#[derive(Deserialize)]
struct RangeBounds {
    start: i64,
    end: i64,
}

impl From<RangeBounds> for TimeRange {
    fn from(bounds: RangeBounds) -> Self {
        Self::new(bounds.start, bounds.end)
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::new(DEFAULT_RANGE_START, DEFAULT_RANGE_END)
    }
}

/// Latitude/longitude rectangle, edges included
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "BoxEdges")]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Create a box from edges; swapped edges are put back in order
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north: north.max(south),
            south: north.min(south),
            east: east.max(west),
            west: east.min(west),
        }
    }

    /// Create a box from two opposite `(lat, long)` corners
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        let (lat_1, long_1) = a;
        let (lat_2, long_2) = b;
        Self::new(lat_1, lat_2, long_1, long_2)
    }

    /// The whole globe
    pub fn globe() -> Self {
        Self::new(90.0, -90.0, 180.0, -180.0)
    }

    /// Check whether a point lies inside the box
    pub fn contains(&self, lat: f64, long: f64) -> bool {
        lat <= self.north && lat >= self.south && long <= self.east && long >= self.west
    }
}

#[derive(Deserialize)]
struct BoxEdges {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

impl From<BoxEdges> for BoundingBox {
    fn from(edges: BoxEdges) -> Self {
        Self::new(edges.north, edges.south, edges.east, edges.west)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::globe()
    }
}

/// Window around an event, expressed in days on either side of it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeWindow {
    /// UNIX timestamp of the event
    pub center: f64,
    /// Days shown before the event
    pub days_before: f64,
    /// Days shown after the event
    pub days_after: f64,
}

impl TimeWindow {
    pub fn new(center: f64, days_before: f64, days_after: f64) -> Self {
        Self {
            center,
            days_before,
            days_after,
        }
    }

    /// Window start in epoch seconds
    pub fn start(&self) -> f64 {
        self.center - self.days_before * SECONDS_PER_DAY
    }

    /// Window end in epoch seconds
    pub fn end(&self) -> f64 {
        self.center + self.days_after * SECONDS_PER_DAY
    }

    /// Check whether `x` lies strictly inside the window
    pub fn contains(&self, x: f64) -> bool {
        x > self.start() && x < self.end()
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::new(1_450_000_000.0, 50.0, 20.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_order_independent() {
        let range = TimeRange::new(100, 50);
        assert_eq!(range.start, 50);
        assert_eq!(range.end, 100);
        assert!(range.contains(75));
    }

    #[test]
    fn test_time_range_is_closed() {
        let range = TimeRange::new(100, 200);
        assert!(range.contains(100));
        assert!(range.contains(200));
        assert!(!range.contains(99));
        assert!(!range.contains(201));
    }

    #[test]
    fn test_default_time_range() {
        let range = TimeRange::default();
        assert!(range.contains(0));
        assert!(range.contains(DEFAULT_RANGE_END));
        assert!(!range.contains(DEFAULT_RANGE_END + 1));
    }

    #[test]
    fn test_bounding_box_from_corners() {
        let bbox = BoundingBox::from_corners((10.0, 20.0), (-10.0, -20.0));
        assert!(bbox.contains(0.0, 0.0));
        assert!(!bbox.contains(11.0, 0.0));
        assert!(!bbox.contains(0.0, -20.5));
    }

    #[test]
    fn test_bounding_box_normalizes_swapped_edges() {
        let bbox = BoundingBox::new(-10.0, 10.0, -20.0, 20.0);
        assert_eq!(bbox, BoundingBox::new(10.0, -10.0, 20.0, -20.0));
        assert!(bbox.contains(10.0, 20.0));
        assert!(bbox.contains(-10.0, -20.0));
    }

    #[test]
    fn test_globe_contains_poles_and_antimeridian() {
        let bbox = BoundingBox::default();
        assert!(bbox.contains(90.0, 180.0));
        assert!(bbox.contains(-90.0, -180.0));
        assert!(!bbox.contains(90.5, 0.0));
    }

    #[test]
    fn test_time_window_is_open() {
        let window = TimeWindow::new(1000.0 * SECONDS_PER_DAY, 2.0, 1.0);
        assert!(!window.contains(window.start()));
        assert!(!window.contains(window.end()));
        assert!(window.contains(window.center));
        assert_eq!(window.end() - window.center, SECONDS_PER_DAY);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let range: TimeRange = serde_json::from_str(r#"{"start": 10, "end": -5}"#).unwrap();
        assert_eq!(range, TimeRange::new(-5, 10));

        let bbox: BoundingBox =
            serde_json::from_str(r#"{"north": -1, "south": 1, "east": 2, "west": 3}"#).unwrap();
        assert_eq!(bbox.north, 1.0);
        assert_eq!(bbox.west, 2.0);
    }

    #[test]
    fn test_config_roundtrip() {
        let window = TimeWindow::default();
        let json = serde_json::to_string(&window).unwrap();
        let back: TimeWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(window, back);
    }
}
