//! Configuration loading and management for the labor cost engine.
//!
//! This module provides functionality to load simulation configurations from
//! YAML files: the statutory base-hours schedule, the payroll surcharge rate,
//! the weeks-per-month factor and the fleet projection horizon.
//!
//! # Example
//!
//! ```no_run
//! use labor_cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/reform").unwrap();
//! println!("Horizon starts {}", config.config().horizon().start);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BaseHoursChange, BaseHoursSchedule, Horizon, PayrollConfig, SimulationConfig};
