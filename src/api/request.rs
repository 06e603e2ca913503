//! Request types for the labor cost engine API.
//!
//! This module defines the JSON request structures for the `/simulate/employees`
//! and `/simulate/fleet` endpoints.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, Month, MonthlyHours, WeeklyHours};

/// Request body for the `/simulate/employees` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeSimulationRequest {
    /// The calendar year to simulate.
    pub year: i32,
    /// The employees to simulate.
    pub employees: Vec<EmployeeRequest>,
}

/// Employee information in a simulation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeRequest {
    /// The employee's display name.
    pub name: String,
    /// Monthly base salary.
    pub monthly_salary: Decimal,
    /// Fixed monthly transportation allowance.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Hours per month, keyed by `YYYY-MM`.
    #[serde(default)]
    pub hours_by_month: BTreeMap<Month, MonthlyHours>,
}

/// Request body for the `/simulate/fleet` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetSimulationRequest {
    /// Monthly base salary shared by the whole headcount.
    pub monthly_salary: Decimal,
    /// Number of employees.
    pub headcount: u32,
    /// Weekly hours per category, constant across the horizon.
    #[serde(default)]
    pub weekly_hours: WeeklyHours,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            name: req.name,
            monthly_salary: req.monthly_salary,
            transport_allowance: req.transport_allowance,
            hours_by_month: req.hours_by_month,
        }
    }
}
