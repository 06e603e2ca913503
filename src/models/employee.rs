//! Employee model for the per-employee simulator.
//!
//! This module defines the [`Employee`] snapshot: salary, transportation
//! allowance and the hours worked in each month of the simulated year.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Month, MonthlyHours};

/// An employee as captured at the start of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name; conventionally unique but not required to be.
    pub name: String,
    /// Monthly base salary.
    pub monthly_salary: Decimal,
    /// Fixed monthly transportation allowance, added after the surcharge.
    pub transport_allowance: Decimal,
    /// Hours worked per month, expected to cover the twelve months of the simulated year.
    pub hours_by_month: BTreeMap<Month, MonthlyHours>,
}

impl Employee {
    /// Builds an employee who works the same hours in every month of `year`.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_cost_engine::models::{Employee, MonthlyHours, Month};
    /// use rust_decimal::Decimal;
    ///
    /// let hours = MonthlyHours {
    ///     ordinary: Decimal::from(176),
    ///     ..MonthlyHours::default()
    /// };
    /// let employee = Employee::with_uniform_hours(
    ///     "Ana",
    ///     Decimal::from(1_300_000),
    ///     Decimal::from(140_606),
    ///     2026,
    ///     hours,
    /// );
    /// assert_eq!(employee.hours_by_month.len(), 12);
    /// assert!(employee.hours_for(Month::new(2026, 5).unwrap()).is_some());
    /// ```
    pub fn with_uniform_hours(
        name: impl Into<String>,
        monthly_salary: Decimal,
        transport_allowance: Decimal,
        year: i32,
        hours: MonthlyHours,
    ) -> Self {
        Self {
            name: name.into(),
            monthly_salary,
            transport_allowance,
            hours_by_month: Month::months_of_year(year)
                .map(|month| (month, hours.clone()))
                .collect(),
        }
    }

    /// Returns the hours recorded for `month`, if any.
    pub fn hours_for(&self, month: Month) -> Option<&MonthlyHours> {
        self.hours_by_month.get(&month)
    }
}
