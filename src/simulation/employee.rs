//! Per-employee monthly simulator.

use tracing::debug;

use crate::calculation::{aggregate_employee_month, resolve_month_rate};
use crate::config::SimulationConfig;
use crate::error::EngineResult;
use crate::models::{Employee, EmployeeMonthRecord};

use super::validation::validate_employees;

/// Simulates every month of `year` for every employee.
///
/// Inputs are validated up front; on any error no records are returned.
/// Records are ordered employee-major (input order), then by month.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::config::SimulationConfig;
/// use labor_cost_engine::models::{Employee, MonthlyHours};
/// use labor_cost_engine::simulation::run_employee_simulation;
/// use rust_decimal::Decimal;
///
/// let hours = MonthlyHours { ordinary: Decimal::from(176), ..MonthlyHours::default() };
/// let employees = vec![Employee::with_uniform_hours(
///     "Ana",
///     Decimal::from(1_300_000),
///     Decimal::from(140_606),
///     2026,
///     hours,
/// )];
///
/// let records = run_employee_simulation(2026, &employees, &SimulationConfig::default()).unwrap();
/// assert_eq!(records.len(), 12);
/// assert_eq!(records[0].base_hours, 220);
/// assert_eq!(records[11].base_hours, 210);
/// ```
pub fn run_employee_simulation(
    year: i32,
    employees: &[Employee],
    config: &SimulationConfig,
) -> EngineResult<Vec<EmployeeMonthRecord>> {
    validate_employees(year, employees)?;

    let mut records = Vec::with_capacity(employees.len() * 12);

    for employee in employees {
        // Validated: exactly the twelve months of `year`, in ascending order.
        for (&month, hours) in &employee.hours_by_month {
            let rate = resolve_month_rate(month, employee.monthly_salary, config.schedule())?;

            let cost = aggregate_employee_month(
                rate.hourly_rate,
                hours,
                employee.transport_allowance,
                config.statutory_surcharge_rate(),
            )?;

            records.push(EmployeeMonthRecord {
                employee: employee.name.clone(),
                month,
                base_hours: rate.base_hours,
                hourly_rate: rate.hourly_rate,
                costs: cost.costs,
                subtotal: cost.subtotal,
                allowance: cost.allowance,
                surcharge: cost.surcharge,
                total: cost.total,
            });
        }
    }

    debug!(
        year,
        employees = employees.len(),
        records = records.len(),
        "Employee simulation completed"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseHoursChange, BaseHoursSchedule, PayrollConfig};
    use crate::error::EngineError;
    use crate::models::{HourCategory, Month, MonthlyHours, round_currency};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_hours() -> MonthlyHours {
        MonthlyHours {
            ordinary: dec("176"),
            night: dec("16"),
            sunday_holiday: dec("12"),
            ..MonthlyHours::default()
        }
    }

    fn employee(name: &str, year: i32) -> Employee {
        Employee::with_uniform_hours(name, dec("1300000"), dec("140606"), year, reference_hours())
    }

    #[test]
    fn test_twelve_records_per_employee_in_order() {
        let employees = vec![employee("Empleado 1", 2025), employee("Empleado 2", 2025)];
        let records =
            run_employee_simulation(2025, &employees, &SimulationConfig::default()).unwrap();

        assert_eq!(records.len(), 24);
        assert!(records[..12].iter().all(|r| r.employee == "Empleado 1"));
        assert!(records[12..].iter().all(|r| r.employee == "Empleado 2"));

        let months: Vec<String> = records[..12].iter().map(|r| r.month.to_string()).collect();
        assert_eq!(months.first().unwrap(), "2025-01");
        assert_eq!(months.last().unwrap(), "2025-12");
        assert!(records[..12].windows(2).all(|w| w[0].month < w[1].month));
    }

    #[test]
    fn test_base_hours_follow_reform_in_2025() {
        let records =
            run_employee_simulation(2025, &[employee("A", 2025)], &SimulationConfig::default())
                .unwrap();

        let base: Vec<u32> = records.iter().map(|r| r.base_hours).collect();
        // July is anchored on the 1st, before the 16 July cutoff.
        assert_eq!(
            base,
            vec![230, 230, 230, 230, 230, 230, 230, 220, 220, 220, 220, 220]
        );
    }

    #[test]
    fn test_base_hours_follow_reform_in_2026_and_2027() {
        let config = SimulationConfig::default();

        let records_2026 = run_employee_simulation(2026, &[employee("A", 2026)], &config).unwrap();
        let base: Vec<u32> = records_2026.iter().map(|r| r.base_hours).collect();
        assert_eq!(
            base,
            vec![220, 220, 220, 220, 220, 220, 210, 210, 210, 210, 210, 210]
        );

        let records_2027 = run_employee_simulation(2027, &[employee("A", 2027)], &config).unwrap();
        assert!(records_2027.iter().all(|r| r.base_hours == 210));
    }

    #[test]
    fn test_reference_month_figures() {
        let records =
            run_employee_simulation(2025, &[employee("A", 2025)], &SimulationConfig::default())
                .unwrap();
        let june = &records[5];
        let row = june.display_row();

        assert_eq!(june.month.to_string(), "2025-06");
        assert_eq!(row.hourly_rate, dec("5652.17"));
        assert_eq!(row.base_hours, 230);
        assert_eq!(
            round_currency(june.cost(HourCategory::Ordinary).unwrap().amount),
            dec("994783")
        );
        assert_eq!(row.subtotal, dec("1252522"));
        assert_eq!(row.allowance, dec("140606"));
        assert_eq!(row.surcharge, dec("651311"));
        assert_eq!(row.total, dec("2044439"));
    }

    #[test]
    fn test_hours_vary_per_month() {
        let mut emp = employee("A", 2027);
        let march = Month::new(2027, 3).unwrap();
        emp.hours_by_month.insert(march, MonthlyHours::default());

        let records = run_employee_simulation(2027, &[emp], &SimulationConfig::default()).unwrap();
        assert_eq!(records[2].subtotal, Decimal::ZERO);
        assert_eq!(records[2].total, dec("140606"));
        assert!(records[3].subtotal > Decimal::ZERO);
    }

    #[test]
    fn test_invalid_employee_produces_no_records() {
        let mut bad = employee("B", 2025);
        bad.monthly_salary = Decimal::ZERO;

        let result = run_employee_simulation(
            2025,
            &[employee("A", 2025), bad],
            &SimulationConfig::default(),
        );
        assert!(matches!(result, Err(EngineError::Validation { .. })));
    }

    #[test]
    fn test_zero_base_hours_in_schedule_fails_run() {
        let schedule = BaseHoursSchedule::new(
            230,
            vec![BaseHoursChange {
                effective_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                hours: 0,
            }],
        );
        let config = SimulationConfig::new(schedule, PayrollConfig::default());

        let result = run_employee_simulation(2025, &[employee("A", 2025)], &config);
        assert!(matches!(result, Err(EngineError::DivisionByZero { .. })));
    }

    #[test]
    fn test_unrepresentable_year_fails_run() {
        let result = run_employee_simulation(
            300_000,
            &[employee("A", 300_000)],
            &SimulationConfig::default(),
        );
        match result {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "year"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let employees = vec![employee("A", 2026), employee("B", 2026)];
        let config = SimulationConfig::default();

        let first = run_employee_simulation(2026, &employees, &config).unwrap();
        let second = run_employee_simulation(2026, &employees, &config).unwrap();
        assert_eq!(first, second);
    }
}
