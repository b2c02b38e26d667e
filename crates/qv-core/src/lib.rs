//! Core functionality for the quake/sensor visualization toolkit
//!
//! This crate provides the windowing predicates and event types shared by
//! the data and view crates.

pub mod events;
pub mod time;
pub mod window;

use thiserror::Error;

// Re-export commonly used types
pub use events::EventSet;
pub use time::{datetime_to_timestamp, Zone};
pub use window::{BoundingBox, TimeRange, TimeWindow, SECONDS_PER_DAY};

/// Errors raised while constructing core values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
