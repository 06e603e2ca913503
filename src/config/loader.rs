//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading simulation
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{BaseHoursSchedule, PayrollConfig, SimulationConfig};

/// Loads and provides access to simulation configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/reform/
/// ├── schedule.yaml   # Base monthly hours and the dates they change
/// └── payroll.yaml    # Surcharge rate, weeks per month, projection horizon
/// ```
///
/// # Example
///
/// ```no_run
/// use labor_cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/reform").unwrap();
/// println!("Surcharge rate: {}", loader.config().statutory_surcharge_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SimulationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or an out-of-range value (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<BaseHoursSchedule>(&schedule_path)?;

        let payroll_path = path.join("payroll.yaml");
        let payroll = Self::load_yaml::<PayrollConfig>(&payroll_path)?;
        Self::check_payroll(&payroll, &payroll_path)?;

        Ok(Self {
            config: SimulationConfig::new(schedule, payroll),
        })
    }

    /// Wraps an in-memory configuration, typically [`SimulationConfig::default`].
    pub fn from_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects payroll factors that would make every projection meaningless.
    fn check_payroll(payroll: &PayrollConfig, path: &Path) -> EngineResult<()> {
        let parse_error = |message: &str| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if payroll.statutory_surcharge_rate < Decimal::ZERO {
            return Err(parse_error("statutory_surcharge_rate must not be negative"));
        }
        if payroll.weeks_per_month <= Decimal::ZERO {
            return Err(parse_error("weeks_per_month must be positive"));
        }
        if payroll.horizon.end < payroll.horizon.start {
            return Err(parse_error("horizon end precedes horizon start"));
        }
        Ok(())
    }

    /// Returns the underlying simulation configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
