//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs. The
//! `[market]` table is validated while parsing, so a loaded config always
//! carries a usable parameter set. All other tables are optional and default
//! to the standard driver run: charts at t = 0, 0.5, 1, a 100-point dynamics
//! chart and a comparative-statics table at quarter steps.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::plot::ChartStyle;
use crate::types::{LaborMarketParams, RawParams};

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub market: LaborMarketParams,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory charts are written to.
    pub directory: PathBuf,
    pub render_charts: bool,
    /// Times at which a market chart is drawn.
    pub snapshot_times: Vec<f64>,
    /// Samples on the dynamics chart.
    pub dynamics_points: usize,
    /// Times listed in the comparative-statics table.
    pub statics_times: Vec<f64>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            render_charts: true,
            snapshot_times: vec![0.0, 0.5, 1.0],
            dynamics_points: 100,
            statics_times: vec![0.0, 0.25, 0.5, 0.75, 1.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "ChartStyle::market")]
    pub market: ChartStyle,
    #[serde(default = "ChartStyle::dynamics")]
    pub dynamics: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            market: ChartStyle::market(),
            dynamics: ChartStyle::dynamics(),
        }
    }
}

/// The reference market: L* = w* = 10 with a floor of 12.
pub fn example_market() -> RawParams {
    RawParams {
        a_s: 5.0,
        b_s: 0.5,
        a_d0: 20.0,
        b_d: 1.0,
        k: 3.0,
        w_bar: 12.0,
        t: 0.0,
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the example market.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        info!(path = %path.display(), "No config file found, using example market");
        Ok(Self {
            market: example_market().validate()?,
            output: OutputConfig::default(),
            chart: ChartConfig::default(),
        })
    }
}
