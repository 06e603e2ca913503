//! Configuration types for cost simulation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type has a default
//! matching the statutory values of the working-hours reform.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Month;

/// A change in statutory base monthly hours taking effect on a date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BaseHoursChange {
    /// First date on which `hours` applies.
    pub effective_date: NaiveDate,
    /// Base monthly hours from that date on.
    pub hours: u32,
}

#[derive(Deserialize)]
struct RawSchedule {
    initial_hours: u32,
    #[serde(default)]
    changes: Vec<BaseHoursChange>,
}

/// The step function from calendar date to statutory base monthly hours.
///
/// Dates before the first change use `initial_hours`; every change applies
/// from its effective date (inclusive) until the next change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSchedule")]
pub struct BaseHoursSchedule {
    /// Hours in force before the first change.
    initial_hours: u32,
    /// Changes sorted by effective date, oldest first.
    changes: Vec<BaseHoursChange>,
}

impl BaseHoursSchedule {
    /// Creates a schedule, sorting `changes` by effective date.
    pub fn new(initial_hours: u32, changes: Vec<BaseHoursChange>) -> Self {
        let mut sorted_changes = changes;
        sorted_changes.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            initial_hours,
            changes: sorted_changes,
        }
    }

    /// The reform schedule: 230 hours, then 220 from 2025-07-16, then 210 from 2026-07-01.
    pub fn statutory() -> Self {
        Self::new(
            230,
            vec![
                BaseHoursChange {
                    effective_date: NaiveDate::from_ymd_opt(2025, 7, 16).unwrap_or_default(),
                    hours: 220,
                },
                BaseHoursChange {
                    effective_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap_or_default(),
                    hours: 210,
                },
            ],
        )
    }

    /// Hours in force before the first change.
    pub fn initial_hours(&self) -> u32 {
        self.initial_hours
    }

    /// Changes sorted by effective date, oldest first.
    pub fn changes(&self) -> &[BaseHoursChange] {
        &self.changes
    }
}

impl From<RawSchedule> for BaseHoursSchedule {
    fn from(raw: RawSchedule) -> Self {
        Self::new(raw.initial_hours, raw.changes)
    }
}

impl Default for BaseHoursSchedule {
    fn default() -> Self {
        Self::statutory()
    }
}

/// The inclusive month range covered by a fleet projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Horizon {
    /// First projected month.
    pub start: Month,
    /// Last projected month.
    pub end: Month,
}

impl Horizon {
    /// Iterates the months of the horizon in chronological order.
    pub fn months(&self) -> impl Iterator<Item = Month> {
        Month::range_inclusive(self.start, self.end)
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self {
            start: Month::from_literal(2025, 1),
            end: Month::from_literal(2027, 12),
        }
    }
}

/// Payroll factors from payroll.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollConfig {
    /// Parafiscal and benefits load applied to the per-employee subtotal.
    pub statutory_surcharge_rate: Decimal,
    /// Factor converting weekly hours into monthly hours in fleet projections.
    pub weeks_per_month: Decimal,
    /// Months covered by a fleet projection.
    pub horizon: Horizon,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            statutory_surcharge_rate: Decimal::new(52, 2),
            weeks_per_month: Decimal::new(433, 2),
            horizon: Horizon::default(),
        }
    }
}

/// The complete simulation configuration.
///
/// `SimulationConfig::default()` is the statutory configuration and matches
/// the files shipped under `config/reform`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationConfig {
    schedule: BaseHoursSchedule,
    payroll: PayrollConfig,
}

impl SimulationConfig {
    /// Creates a new SimulationConfig from its component parts.
    pub fn new(schedule: BaseHoursSchedule, payroll: PayrollConfig) -> Self {
        Self { schedule, payroll }
    }

    /// Returns the base hours schedule.
    pub fn schedule(&self) -> &BaseHoursSchedule {
        &self.schedule
    }

    /// Returns the payroll factors.
    pub fn payroll(&self) -> &PayrollConfig {
        &self.payroll
    }

    /// Returns the statutory surcharge rate.
    pub fn statutory_surcharge_rate(&self) -> Decimal {
        self.payroll.statutory_surcharge_rate
    }

    /// Returns the weeks-per-month conversion factor.
    pub fn weeks_per_month(&self) -> Decimal {
        self.payroll.weeks_per_month
    }

    /// Returns the fleet projection horizon.
    pub fn horizon(&self) -> Horizon {
        self.payroll.horizon
    }
}
