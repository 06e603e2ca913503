//! Simulation runs for the labor cost engine.
//!
//! This module orchestrates the two calculation modes over an immutable
//! input snapshot: the per-employee simulator for one calendar year and the
//! fleet projection over the configured horizon. Inputs are validated at the
//! boundary before any record is produced.

mod employee;
mod fleet;
mod series;
mod validation;

pub use employee::run_employee_simulation;
pub use fleet::run_fleet_simulation;
pub use series::{EmployeeSeries, FleetSummary, SeriesPoint, group_by_employee, summarize_fleet};
pub use validation::{validate_employee, validate_employees, validate_fleet};
