//! Application configuration file
//!
//! A single JSON document holding defaults for every command. Each section
//! may be left out; command-line flags override whatever is loaded here.

use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use qv_core::TimeWindow;
use qv_data::{CsvConfig, FilterConfig, NullConfig};
use qv_views::ChartConfig;

/// Settings for the `plot` command
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlotSettings {
    pub csv: CsvConfig,
    pub nulls: NullConfig,
    pub chart: ChartConfig,
    pub window: TimeWindow,
}

/// Root of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub filter: FilterConfig,
    pub plot: PlotSettings,
}

impl AppConfig {
    /// Load from `path`, or fall back to defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}
