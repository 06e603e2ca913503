//! Calculation logic for the labor cost engine.
//!
//! This module contains the rate engine (base hours lookup and hourly rate)
//! and the cost aggregator: the shared per-category cost primitive plus the
//! per-employee and fleet aggregation rules built on it.

mod base_hours;
mod category_cost;
mod employee_month;
mod fleet_month;

pub use base_hours::{MonthlyRate, hourly_rate, resolve_base_hours, resolve_month_rate};
pub use category_cost::{category_cost, category_costs};
pub(crate) use category_cost::checked_sum;
pub use employee_month::{EmployeeMonthCost, aggregate_employee_month};
pub use fleet_month::{FleetMonthCost, aggregate_fleet_month};
