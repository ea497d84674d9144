//! Dashboard Configuration
//! Window geometry and rendering knobs, optionally read from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File looked up in the working directory at start-up.
pub const CONFIG_FILE_NAME: &str = "airline-dashboard.json";

/// Largest accepted PNG export side, in pixels.
pub const MAX_EXPORT_SIDE: u32 = 8000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runtime settings. Every field has a default, so a config file only needs
/// the keys it wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub min_window_width: f32,
    pub min_window_height: f32,
    /// Rows shown in the dataset preview.
    pub preview_rows: usize,
    /// Bin count for histograms of continuous columns.
    pub histogram_bins: usize,
    pub export_width: u32,
    pub export_height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 820.0,
            min_window_width: 960.0,
            min_window_height: 600.0,
            preview_rows: 5,
            histogram_bins: 30,
            export_width: 1200,
            export_height: 800,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(text)?;
        config.preview_rows = config.preview_rows.max(1);
        config.histogram_bins = config.histogram_bins.max(1);
        config.export_width = config.export_width.clamp(200, MAX_EXPORT_SIDE);
        config.export_height = config.export_height.clamp(150, MAX_EXPORT_SIDE);
        Ok(config)
    }

    /// Read the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
