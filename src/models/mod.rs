//! Core data models for the labor cost engine.
//!
//! This module contains the input snapshot types (employees and hours per
//! category) and the per-month records both simulators produce.

mod category_hours;
mod employee;
mod hour_category;
mod month;
mod month_record;

pub use category_hours::{CategoryHours, MonthlyHours, WeeklyHours};
pub use employee::Employee;
pub use hour_category::HourCategory;
pub use month::Month;
pub use month_record::{
    CategoryCost, EmployeeMonthRecord, EmployeeMonthRow, FleetMonthRecord, FleetMonthRow,
    round_currency, round_rate,
};
