//! Simulation output records.
//!
//! This module contains the per-month records produced by both simulators and
//! the display rows derived from them. Records keep unrounded values so any
//! further aggregation stays exact; rounding happens only in
//! [`EmployeeMonthRecord::display_row`] and [`FleetMonthRecord::display_row`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{HourCategory, Month};

/// Rounds a monetary amount to whole currency units (half to even).
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp(0)
}

/// Rounds an hourly rate to two decimal places (half to even).
pub fn round_rate(rate: Decimal) -> Decimal {
    rate.round_dp(2)
}

/// The cost contributed by one hour category in one month.
///
/// # Example
///
/// ```
/// use labor_cost_engine::models::{CategoryCost, HourCategory};
/// use rust_decimal::Decimal;
///
/// let line = CategoryCost {
///     category: HourCategory::Night,
///     hours: Decimal::from(16),
///     multiplier: HourCategory::Night.multiplier(),
///     amount: Decimal::from(16) * Decimal::from(5000) * HourCategory::Night.multiplier(),
/// };
/// assert_eq!(line.amount, Decimal::from(108_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCost {
    /// The hour category.
    pub category: HourCategory,
    /// Hours costed in this category (monthly hours in both modes).
    pub hours: Decimal,
    /// The multiplier applied to the hourly rate.
    pub multiplier: Decimal,
    /// The resulting amount, unrounded.
    pub amount: Decimal,
}

/// One employee's cost for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonthRecord {
    /// The employee's name.
    pub employee: String,
    /// The simulated month.
    pub month: Month,
    /// Statutory base hours in force on the first day of the month.
    pub base_hours: u32,
    /// Monthly salary divided by base hours.
    pub hourly_rate: Decimal,
    /// Cost lines, one per hour category.
    pub costs: Vec<CategoryCost>,
    /// Sum of the cost lines.
    pub subtotal: Decimal,
    /// Transportation allowance.
    pub allowance: Decimal,
    /// Statutory payroll surcharge on the subtotal.
    pub surcharge: Decimal,
    /// Subtotal plus surcharge plus allowance.
    pub total: Decimal,
}

/// A rounded, presentation-ready view of an [`EmployeeMonthRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonthRow {
    /// The employee's name.
    pub employee: String,
    /// The simulated month.
    pub month: Month,
    /// Hourly rate rounded to two decimals.
    pub hourly_rate: Decimal,
    /// Statutory base hours.
    pub base_hours: u32,
    /// Subtotal rounded to whole units.
    pub subtotal: Decimal,
    /// Allowance rounded to whole units.
    pub allowance: Decimal,
    /// Surcharge rounded to whole units.
    pub surcharge: Decimal,
    /// Total rounded to whole units.
    pub total: Decimal,
}

impl EmployeeMonthRecord {
    /// Returns the cost line for `category`, if present.
    pub fn cost(&self, category: HourCategory) -> Option<&CategoryCost> {
        self.costs.iter().find(|c| c.category == category)
    }

    /// Rounds every figure for display.
    ///
    /// Each figure is rounded independently from its unrounded value, so the
    /// displayed total may differ by one unit from the sum of displayed parts.
    pub fn display_row(&self) -> EmployeeMonthRow {
        EmployeeMonthRow {
            employee: self.employee.clone(),
            month: self.month,
            hourly_rate: round_rate(self.hourly_rate),
            base_hours: self.base_hours,
            subtotal: round_currency(self.subtotal),
            allowance: round_currency(self.allowance),
            surcharge: round_currency(self.surcharge),
            total: round_currency(self.total),
        }
    }
}

/// The cost of a uniform headcount for one month of a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetMonthRecord {
    /// The projected month.
    pub month: Month,
    /// Statutory base hours in force on the first day of the month.
    pub base_hours: u32,
    /// Monthly salary divided by base hours.
    pub hourly_rate: Decimal,
    /// Number of employees costed.
    pub headcount: u32,
    /// Cost lines for the whole headcount, one per hour category.
    pub costs: Vec<CategoryCost>,
    /// Sum of the cost lines. No surcharge or allowance is included.
    pub total: Decimal,
}

/// A rounded, presentation-ready view of a [`FleetMonthRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetMonthRow {
    /// The projected month.
    pub month: Month,
    /// Statutory base hours.
    pub base_hours: u32,
    /// Hourly rate rounded to two decimals.
    pub hourly_rate: Decimal,
    /// Cost per category rounded to whole units.
    pub costs: BTreeMap<HourCategory, Decimal>,
    /// Month total rounded to whole units.
    pub total: Decimal,
}

impl FleetMonthRecord {
    /// Returns the cost line for `category`, if present.
    pub fn cost(&self, category: HourCategory) -> Option<&CategoryCost> {
        self.costs.iter().find(|c| c.category == category)
    }

    /// Rounds every figure for display.
    pub fn display_row(&self) -> FleetMonthRow {
        FleetMonthRow {
            month: self.month,
            base_hours: self.base_hours,
            hourly_rate: round_rate(self.hourly_rate),
            costs: self
                .costs
                .iter()
                .map(|c| (c.category, round_currency(c.amount)))
                .collect(),
            total: round_currency(self.total),
        }
    }
}
