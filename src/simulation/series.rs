//! Regrouping of simulation records for charts and horizon totals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::checked_sum;
use crate::error::EngineResult;
use crate::models::{EmployeeMonthRecord, FleetMonthRecord, HourCategory, Month, round_currency};

/// One point of a monthly total time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// The month.
    pub month: Month,
    /// The month total, rounded to whole units.
    pub total: Decimal,
}

/// The monthly total series of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSeries {
    /// The employee's name.
    pub employee: String,
    /// Points in record order.
    pub points: Vec<SeriesPoint>,
}

/// Regroups per-employee records into one total series per employee name.
///
/// Series appear in the order their name is first seen. Employees sharing a
/// name share a series, with their points interleaved in record order.
pub fn group_by_employee(records: &[EmployeeMonthRecord]) -> Vec<EmployeeSeries> {
    let mut series: Vec<EmployeeSeries> = Vec::new();

    for record in records {
        let point = SeriesPoint {
            month: record.month,
            total: round_currency(record.total),
        };

        match series.iter_mut().find(|s| s.employee == record.employee) {
            Some(existing) => existing.points.push(point),
            None => series.push(EmployeeSeries {
                employee: record.employee.clone(),
                points: vec![point],
            }),
        }
    }

    series
}

/// Totals of a fleet projection across its whole horizon, unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    /// Sum of each category's cost over every month.
    pub category_totals: BTreeMap<HourCategory, Decimal>,
    /// Sum of every month total.
    pub grand_total: Decimal,
}

/// Sums fleet records per category and overall.
pub fn summarize_fleet(records: &[FleetMonthRecord]) -> EngineResult<FleetSummary> {
    let category_totals = HourCategory::ALL
        .into_iter()
        .map(|category| {
            let amounts = records
                .iter()
                .flat_map(|r| r.costs.iter())
                .filter(|c| c.category == category)
                .map(|c| c.amount);
            Ok((category, checked_sum(amounts)?))
        })
        .collect::<EngineResult<BTreeMap<_, _>>>()?;

    Ok(FleetSummary {
        category_totals,
        grand_total: checked_sum(records.iter().map(|r| r.total))?,
    })
}
