//! Per-employee monthly aggregation.
//!
//! Category costs are summed into a subtotal, the statutory payroll surcharge
//! is applied to the subtotal, and the transportation allowance is added last.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{CategoryCost, MonthlyHours};

use super::category_cost::{category_costs, checked_mul, checked_sum};

/// The cost of one employee for one month, unrounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeMonthCost {
    /// Cost lines, one per hour category.
    pub costs: Vec<CategoryCost>,
    /// Sum of the cost lines.
    pub subtotal: Decimal,
    /// `subtotal × surcharge_rate`.
    pub surcharge: Decimal,
    /// The allowance that was added.
    pub allowance: Decimal,
    /// `subtotal + surcharge + allowance`.
    pub total: Decimal,
}

/// Aggregates one employee-month.
///
/// 1. cost per category = hours × hourly rate × multiplier
/// 2. subtotal = Σ costs
/// 3. surcharge = subtotal × `surcharge_rate`
/// 4. total = subtotal + surcharge + `allowance`
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::aggregate_employee_month;
/// use labor_cost_engine::models::MonthlyHours;
/// use rust_decimal::Decimal;
///
/// let hours = MonthlyHours { ordinary: Decimal::from(100), ..MonthlyHours::default() };
/// let cost = aggregate_employee_month(
///     Decimal::from(10),
///     &hours,
///     Decimal::from(50),
///     Decimal::new(52, 2),
/// ).unwrap();
///
/// assert_eq!(cost.subtotal, Decimal::from(1000));
/// assert_eq!(cost.surcharge, Decimal::from(520));
/// assert_eq!(cost.total, Decimal::from(1570));
/// ```
pub fn aggregate_employee_month(
    hourly_rate: Decimal,
    hours: &MonthlyHours,
    allowance: Decimal,
    surcharge_rate: Decimal,
) -> EngineResult<EmployeeMonthCost> {
    let costs = category_costs(hours, hourly_rate)?;
    let subtotal = checked_sum(costs.iter().map(|c| c.amount))?;
    let surcharge = checked_mul(subtotal, surcharge_rate)?;
    let total = checked_sum([subtotal, surcharge, allowance])?;

    Ok(EmployeeMonthCost {
        costs,
        subtotal,
        surcharge,
        allowance,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HourCategory, round_currency};
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

    #[test]
    fn test_reference_month_before_reform() {
        let rate = dec("1300000") / Decimal::from(230);
        let cost =
            aggregate_employee_month(rate, &reference_hours(), dec("140606"), dec("0.52")).unwrap();

        let amount = |category| {
            round_currency(
                cost.costs
                    .iter()
                    .find(|c| c.category == category)
                    .unwrap()
                    .amount,
            )
        };

        assert_eq!(amount(HourCategory::Ordinary), dec("994783"));
        assert_eq!(amount(HourCategory::Night), dec("122087"));
        assert_eq!(amount(HourCategory::SundayHoliday), dec("135652"));
        assert_eq!(amount(HourCategory::ExtraDaytime), Decimal::ZERO);
        assert_eq!(round_currency(cost.subtotal), dec("1252522"));
        assert_eq!(round_currency(cost.surcharge), dec("651311"));
        assert_eq!(round_currency(cost.total), dec("2044439"));
    }

    #[test]
    fn test_total_formula_uses_unrounded_parts() {
        let rate = dec("1300000") / Decimal::from(230);
        let cost =
            aggregate_employee_month(rate, &reference_hours(), dec("140606"), dec("0.52")).unwrap();

        assert_eq!(cost.surcharge, cost.subtotal * dec("0.52"));
        assert_eq!(cost.total, cost.subtotal + cost.surcharge + dec("140606"));
    }

    #[test]
    fn test_zero_hours_leaves_allowance_only() {
        let cost = aggregate_employee_month(
            dec("5000"),
            &MonthlyHours::default(),
            dec("140606"),
            dec("0.52"),
        )
        .unwrap();

        assert_eq!(cost.subtotal, Decimal::ZERO);
        assert_eq!(cost.surcharge, Decimal::ZERO);
        assert_eq!(cost.total, dec("140606"));
    }

    #[test]
    fn test_surcharge_rate_is_swappable() {
        let hours = MonthlyHours {
            ordinary: dec("10"),
            ..MonthlyHours::default()
        };
        let cost = aggregate_employee_month(dec("100"), &hours, Decimal::ZERO, dec("0.30")).unwrap();

        assert_eq!(cost.subtotal, dec("1000"));
        assert_eq!(cost.surcharge, dec("300"));
        assert_eq!(cost.total, dec("1300"));
    }

    #[test]
    fn test_every_category_contributes() {
        let hours = MonthlyHours {
            ordinary: dec("1"),
            extra_daytime: dec("1"),
            night: dec("1"),
            extra_night: dec("1"),
            sunday_holiday: dec("1"),
            extra_sunday_holiday: dec("1"),
        };
        let cost = aggregate_employee_month(dec("100"), &hours, Decimal::ZERO, Decimal::ZERO).unwrap();

        // 100 × (1.00 + 1.25 + 1.35 + 1.75 + 2.00 + 2.50)
        assert_eq!(cost.subtotal, dec("985"));
    }
}
