//! Fleet projection simulator.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{aggregate_fleet_month, resolve_month_rate};
use crate::config::SimulationConfig;
use crate::error::EngineResult;
use crate::models::{FleetMonthRecord, WeeklyHours};

use super::validation::validate_fleet;

/// Projects a uniform headcount over the configured horizon.
///
/// The same salary, headcount and weekly hours apply to every month; only
/// the base hours (and therefore the hourly rate) change over time. Records
/// are in chronological order, one per horizon month.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::config::SimulationConfig;
/// use labor_cost_engine::models::WeeklyHours;
/// use labor_cost_engine::simulation::run_fleet_simulation;
/// use rust_decimal::Decimal;
///
/// let weekly = WeeklyHours { ordinary: Decimal::from(44), ..WeeklyHours::default() };
/// let records = run_fleet_simulation(
///     Decimal::from(1_300_000),
///     6,
///     &weekly,
///     &SimulationConfig::default(),
/// ).unwrap();
///
/// assert_eq!(records.len(), 36);
/// assert_eq!(records[0].month.to_string(), "2025-01");
/// assert_eq!(records[35].month.to_string(), "2027-12");
/// ```
pub fn run_fleet_simulation(
    monthly_salary: Decimal,
    headcount: u32,
    weekly_hours: &WeeklyHours,
    config: &SimulationConfig,
) -> EngineResult<Vec<FleetMonthRecord>> {
    validate_fleet(monthly_salary, headcount, weekly_hours)?;

    let records = config
        .horizon()
        .months()
        .map(|month| {
            let rate = resolve_month_rate(month, monthly_salary, config.schedule())?;
            let cost = aggregate_fleet_month(
                rate.hourly_rate,
                weekly_hours,
                headcount,
                config.weeks_per_month(),
            )?;

            Ok(FleetMonthRecord {
                month,
                base_hours: rate.base_hours,
                hourly_rate: rate.hourly_rate,
                headcount,
                costs: cost.costs,
                total: cost.total,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    debug!(
        headcount,
        months = records.len(),
        "Fleet projection completed"
    );

    Ok(records)
}
