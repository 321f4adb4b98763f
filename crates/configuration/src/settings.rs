use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub metrics: MetricsSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

/// Controls how the metrics transform treats zero denominators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSettings {
    /// Fail with an error instead of showing `inf`/`NaN` ratios.
    pub strict: bool,
}

/// Display precision used by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Maximum fraction digits for chart and table values.
    pub decimals: usize,
    /// Fixed fraction digits for KPI card headline values.
    pub kpi_decimals: usize,
    /// Millions at or above this magnitude are shown in billions.
    pub billions_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is not set (e.g. "info").
    pub level: String,
    /// When set, logs are also written to `finscope.log` in this directory.
    pub directory: Option<PathBuf>,
}

/// Upper bound for either precision setting.
pub const MAX_DECIMALS: usize = 6;

impl Config {
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        if self.display.decimals > MAX_DECIMALS {
            return Err(crate::ConfigError::ValidationError(format!(
                "display.decimals must be at most {MAX_DECIMALS}, got {}",
                self.display.decimals
            )));
        }
        if self.display.kpi_decimals > MAX_DECIMALS {
            return Err(crate::ConfigError::ValidationError(format!(
                "display.kpi_decimals must be at most {MAX_DECIMALS}, got {}",
                self.display.kpi_decimals
            )));
        }
        if !(self.display.billions_threshold > 0.0) {
            return Err(crate::ConfigError::ValidationError(format!(
                "display.billions_threshold must be positive, got {}",
                self.display.billions_threshold
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(crate::ConfigError::ValidationError(
                "logging.level cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
