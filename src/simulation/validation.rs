//! Boundary validation of simulation inputs.
//!
//! Every check runs before any cost is computed, so a run either produces
//! all of its records or none. Errors name the offending field with a dotted
//! path such as `employees[0].hours_by_month.2025-03.night`.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{CategoryHours, Employee, Month};

fn require_positive(value: Decimal, field: impl Into<String>) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::validation(
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

fn require_non_negative(value: Decimal, field: impl Into<String>) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::validation(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

fn validate_hours(hours: &CategoryHours, prefix: &str) -> EngineResult<()> {
    for (category, quantity) in hours.iter() {
        require_non_negative(quantity, format!("{}.{}", prefix, category.key()))?;
    }
    Ok(())
}

/// Checks one employee against the simulated year.
///
/// The employee must have a positive salary, a non-negative allowance, and
/// non-negative hours for exactly the twelve months of `year`.
pub fn validate_employee(year: i32, index: usize, employee: &Employee) -> EngineResult<()> {
    let prefix = format!("employees[{}]", index);

    require_positive(employee.monthly_salary, format!("{}.monthly_salary", prefix))?;
    require_non_negative(
        employee.transport_allowance,
        format!("{}.transport_allowance", prefix),
    )?;

    for month in Month::months_of_year(year) {
        let field = format!("{}.hours_by_month.{}", prefix, month);
        match employee.hours_for(month) {
            Some(hours) => validate_hours(hours, &field)?,
            None => {
                return Err(EngineError::validation(field, "no hours provided for this month"));
            }
        }
    }

    if let Some(stray) = employee
        .hours_by_month
        .keys()
        .find(|month| month.year() != year)
    {
        return Err(EngineError::validation(
            format!("{}.hours_by_month.{}", prefix, stray),
            format!("month is outside the simulated year {}", year),
        ));
    }

    Ok(())
}

/// Checks every employee of a per-employee run.
pub fn validate_employees(year: i32, employees: &[Employee]) -> EngineResult<()> {
    if Month::new(year, 1).is_none() || Month::new(year, 12).is_none() {
        return Err(EngineError::validation(
            "year",
            format!("{} is outside the supported calendar", year),
        ));
    }

    if employees.is_empty() {
        return Err(EngineError::validation(
            "employees",
            "at least one employee is required",
        ));
    }

    employees
        .iter()
        .enumerate()
        .try_for_each(|(index, employee)| validate_employee(year, index, employee))
}

/// Checks the inputs of a fleet projection.
pub fn validate_fleet(
    monthly_salary: Decimal,
    headcount: u32,
    weekly_hours: &CategoryHours,
) -> EngineResult<()> {
    require_positive(monthly_salary, "monthly_salary")?;

    if headcount == 0 {
        return Err(EngineError::validation("headcount", "must be at least 1"));
    }

    validate_hours(weekly_hours, "weekly_hours")
}
