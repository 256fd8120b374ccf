//! # Run configuration
//!
//! All knobs of a run live in [`BlasiusConfig`]. The binary looks for `blasius_config.json`
//! in the working directory and falls back to the defaults when it is missing.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "n_points": 200000,
//!   "x_min": 0.001,
//!   "x_max": 10.0,
//!   "tolerance": 1e-6,
//!   "initial_h0": 0.1,
//!   "initial_dh": 0.1,
//!   "target": 1.0,
//!   "max_iterations": null,
//!   "plot_file": "blasius_cp.png",
//!   "table_file": "blasius_cp.csv",
//!   "plot_x_bounds": [0.0, 1.5],
//!   "plot_y_bounds": [0.0, 10.0],
//!   "plot_size": [1024, 768],
//!   "log_level": "info"
//! }
//! ```
//! Missing keys take their default values.

use super::BlasiusShooting::{
    BlasiusError, DEFAULT_DH, DEFAULT_H0, DEFAULT_TARGET, DEFAULT_TOLERANCE,
};
use super::grid::{X_MAX, X_MIN};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILE: &str = "blasius_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlasiusConfig {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub tolerance: f64,
    pub initial_h0: f64,
    pub initial_dh: f64,
    pub target: f64,
    pub max_iterations: Option<usize>,
    pub plot_file: String,
    pub table_file: String,
    pub plot_x_bounds: (f64, f64),
    pub plot_y_bounds: (f64, f64),
    pub plot_size: (u32, u32),
    pub log_level: String,
}

impl Default for BlasiusConfig {
    fn default() -> Self {
        Self {
            n_points: 200_000,
            x_min: X_MIN,
            x_max: X_MAX,
            tolerance: DEFAULT_TOLERANCE,
            initial_h0: DEFAULT_H0,
            initial_dh: DEFAULT_DH,
            target: DEFAULT_TARGET,
            max_iterations: None,
            plot_file: "blasius_cp.png".to_string(),
            table_file: "blasius_cp.csv".to_string(),
            plot_x_bounds: (0.0, 1.5),
            plot_y_bounds: (0.0, 10.0),
            plot_size: (1024, 768),
            log_level: "info".to_string(),
        }
    }
}

impl BlasiusConfig {
    /// Reads the configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BlasiusError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlasiusConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, BlasiusError> {
        let path = path.as_ref();
        if path.exists() {
            info!("loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            info!("{} not found, using default configuration", path.display());
            Ok(Self::default())
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BlasiusError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), BlasiusError> {
        let invalid = |msg: String| Err(BlasiusError::InvalidInput(msg));
        if self.n_points < 2 {
            return invalid(format!("n_points must be at least 2, got {}", self.n_points));
        }
        if !(self.x_min > 0.0 && self.x_max > self.x_min && self.x_max.is_finite()) {
            return invalid(format!(
                "grid bounds must satisfy 0 < x_min < x_max (x_min={}, x_max={})",
                self.x_min, self.x_max
            ));
        }
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return invalid(format!("tolerance must be positive, got {}", self.tolerance));
        }
        if !(self.initial_dh > 0.0 && self.initial_dh.is_finite()) {
            return invalid(format!("initial_dh must be positive, got {}", self.initial_dh));
        }
        if !self.initial_h0.is_finite() || !self.target.is_finite() {
            return invalid(format!(
                "initial_h0 and target must be finite (initial_h0={}, target={})",
                self.initial_h0, self.target
            ));
        }
        if self.max_iterations == Some(0) {
            return invalid("max_iterations must be at least 1".to_string());
        }
        if self.plot_x_bounds.0 >= self.plot_x_bounds.1
            || self.plot_y_bounds.0 >= self.plot_y_bounds.1
        {
            return invalid(format!(
                "plot bounds must be increasing (x={:?}, y={:?})",
                self.plot_x_bounds, self.plot_y_bounds
            ));
        }
        if self.plot_size.0 == 0 || self.plot_size.1 == 0 {
            return invalid(format!("plot size must be positive, got {:?}", self.plot_size));
        }
        if self.max_iterations.is_none() {
            warn!("max_iterations is not set, the shooting loop runs until convergence");
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, BlasiusError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            BlasiusError::InvalidInput(format!("unknown log level '{}'", self.log_level))
        })
    }
}
