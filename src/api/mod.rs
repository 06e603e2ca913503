//! HTTP API module for the labor cost engine.
//!
//! This module provides the REST API endpoints that stand in for the
//! simulator's form and table: per-employee simulation for one year and the
//! fleet projection over the configured horizon.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, EmployeeSimulationRequest, FleetSimulationRequest};
pub use response::{ApiError, EmployeeSimulationResponse, FleetSimulationResponse};
pub use state::AppState;
