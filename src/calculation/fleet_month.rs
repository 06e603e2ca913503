//! Fleet monthly aggregation.
//!
//! Weekly hours are scaled to monthly hours with a fixed weeks-per-month
//! factor and costed for the whole headcount. Unlike the per-employee mode,
//! no surcharge and no allowance are added.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{CategoryCost, HourCategory, WeeklyHours};

use super::category_cost::{category_cost, checked_mul, checked_sum};

/// The cost of a uniform headcount for one month, unrounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetMonthCost {
    /// Cost lines for the whole headcount; `hours` holds the monthly hours of one employee.
    pub costs: Vec<CategoryCost>,
    /// Sum of the cost lines.
    pub total: Decimal,
}

/// Aggregates one fleet-month.
///
/// For each category: monthly hours = weekly hours × `weeks_per_month`, and
/// cost = monthly hours × hourly rate × multiplier × `headcount`.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::aggregate_fleet_month;
/// use labor_cost_engine::models::WeeklyHours;
/// use rust_decimal::Decimal;
///
/// let weekly = WeeklyHours { ordinary: Decimal::from(10), ..WeeklyHours::default() };
/// let cost = aggregate_fleet_month(Decimal::from(100), &weekly, 2, Decimal::new(4, 0)).unwrap();
///
/// // 10 h/week × 4 weeks × 100 × 1.00 × 2 employees
/// assert_eq!(cost.total, Decimal::from(8000));
/// ```
pub fn aggregate_fleet_month(
    hourly_rate: Decimal,
    weekly_hours: &WeeklyHours,
    headcount: u32,
    weeks_per_month: Decimal,
) -> EngineResult<FleetMonthCost> {
    let headcount = Decimal::from(headcount);

    let costs = HourCategory::ALL
        .into_iter()
        .map(|category| {
            let monthly_hours = checked_mul(weekly_hours.get(category), weeks_per_month)?;
            let per_employee = category_cost(monthly_hours, hourly_rate, category)?;
            Ok(CategoryCost {
                amount: checked_mul(per_employee.amount, headcount)?,
                ..per_employee
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    let total = checked_sum(costs.iter().map(|c| c.amount))?;

    Ok(FleetMonthCost { costs, total })
}
