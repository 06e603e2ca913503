//! Per-category cost, the primitive shared by both aggregation modes.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{CategoryCost, CategoryHours, HourCategory};

pub(crate) fn checked_mul(lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("decimal overflow multiplying {} by {}", lhs, rhs),
        })
}

pub(crate) fn checked_sum<I>(amounts: I) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| EngineError::CalculationError {
            message: "decimal overflow summing category costs".to_string(),
        })
}

/// Costs `hours` of `category` at `hourly_rate`: hours × rate × multiplier.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::category_cost;
/// use labor_cost_engine::models::HourCategory;
/// use rust_decimal::Decimal;
///
/// let line = category_cost(Decimal::from(10), Decimal::from(1000), HourCategory::ExtraDaytime).unwrap();
/// assert_eq!(line.amount, Decimal::from(12_500));
/// ```
pub fn category_cost(
    hours: Decimal,
    hourly_rate: Decimal,
    category: HourCategory,
) -> EngineResult<CategoryCost> {
    let multiplier = category.multiplier();
    let amount = checked_mul(checked_mul(hours, hourly_rate)?, multiplier)?;

    Ok(CategoryCost {
        category,
        hours,
        multiplier,
        amount,
    })
}

/// Costs every category of `hours`, in [`HourCategory::ALL`] order.
pub fn category_costs(hours: &CategoryHours, hourly_rate: Decimal) -> EngineResult<Vec<CategoryCost>> {
    hours
        .iter()
        .map(|(category, quantity)| category_cost(quantity, hourly_rate, category))
        .collect()
}
