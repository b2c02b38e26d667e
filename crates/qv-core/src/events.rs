//! Discrete event timestamps (earthquakes and the like)

use serde::{Deserialize, Serialize};

use crate::{CoreError, TimeWindow};

/// Ordered list of event timestamps
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventSet {
    timestamps: Vec<f64>,
}

impl EventSet {
    /// Build an event set, rejecting NaN and infinite timestamps
    pub fn new(timestamps: Vec<f64>) -> Result<Self, CoreError> {
        if let Some((idx, value)) = timestamps.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            return Err(CoreError::InvalidInput(format!(
                "event {} has non-numeric timestamp {}",
                idx, value
            )));
        }
        Ok(Self { timestamps })
    }

    /// Parse event timestamps from text
    pub fn parse<'a, I>(values: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let timestamps = values
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| {
                raw.trim().parse::<f64>().map_err(|_| {
                    CoreError::InvalidInput(format!(
                        "event {} has non-numeric timestamp '{}'",
                        idx, raw
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(timestamps)
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// Events strictly inside the window, in original order
    pub fn within<'a>(&'a self, window: &'a TimeWindow) -> impl Iterator<Item = f64> + 'a {
        self.timestamps
            .iter()
            .copied()
            .filter(move |t| window.contains(*t))
    }
}
