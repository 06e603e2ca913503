//! Application state for the labor cost engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, SimulationConfig};

/// Shared application state.
///
/// Holds the loaded simulation configuration; it is read-only for the
/// lifetime of the server, so every request sees the same schedule and
/// payroll factors.
#[derive(Clone)]
pub struct AppState {
    /// The loaded simulation configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the simulation configuration.
    pub fn config(&self) -> &SimulationConfig {
        self.config.config()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::from_config(SimulationConfig::default()))
    }
}
