//! Base hours and hourly rate resolution.
//!
//! This module maps a calendar date to the statutory base monthly hours and
//! turns a monthly salary into the hourly rate every category cost starts from.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::BaseHoursSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::Month;

/// The base hours and hourly rate in force for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRate {
    /// The month the rate applies to.
    pub month: Month,
    /// Statutory base hours on the first day of the month.
    pub base_hours: u32,
    /// Monthly salary divided by base hours, unrounded.
    pub hourly_rate: Decimal,
}

/// Returns the base monthly hours in force on `date`.
///
/// The schedule is a step function with hard cutoffs: the latest change whose
/// effective date is on or before `date` wins, and dates before every change
/// use the schedule's initial hours. Dates beyond any projection horizon keep
/// the last value.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::resolve_base_hours;
/// use labor_cost_engine::config::BaseHoursSchedule;
/// use chrono::NaiveDate;
///
/// let schedule = BaseHoursSchedule::statutory();
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// assert_eq!(resolve_base_hours(date(2025, 7, 15), &schedule), 230);
/// assert_eq!(resolve_base_hours(date(2025, 7, 16), &schedule), 220);
/// assert_eq!(resolve_base_hours(date(2026, 7, 1), &schedule), 210);
/// ```
pub fn resolve_base_hours(date: NaiveDate, schedule: &BaseHoursSchedule) -> u32 {
    // Changes are sorted oldest first, so search from the end.
    schedule
        .changes()
        .iter()
        .rfind(|change| change.effective_date <= date)
        .map(|change| change.hours)
        .unwrap_or(schedule.initial_hours())
}

/// Divides a monthly salary by base hours.
///
/// The result is not rounded; rounding is a display concern applied after
/// every dependent figure has been derived.
///
/// # Errors
///
/// Returns `DivisionByZero` when `base_hours` is zero, which only a custom
/// schedule can produce.
pub fn hourly_rate(monthly_salary: Decimal, base_hours: u32) -> EngineResult<Decimal> {
    if base_hours == 0 {
        return Err(EngineError::DivisionByZero { base_hours });
    }
    Ok(monthly_salary / Decimal::from(base_hours))
}

/// Resolves base hours at the first of `month` and the matching hourly rate.
pub fn resolve_month_rate(
    month: Month,
    monthly_salary: Decimal,
    schedule: &BaseHoursSchedule,
) -> EngineResult<MonthlyRate> {
    let base_hours = resolve_base_hours(month.first_day(), schedule);
    let hourly_rate = hourly_rate(monthly_salary, base_hours)?;

    Ok(MonthlyRate {
        month,
        base_hours,
        hourly_rate,
    })
}
