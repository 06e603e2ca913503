//! Per-category hour quantities.
//!
//! This module contains the [`CategoryHours`] container used both for the
//! monthly hours of one employee and for the uniform weekly hours of a fleet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::HourCategory;

/// Hours worked in each of the six categories.
///
/// Categories omitted from a JSON payload default to zero hours; keys that
/// name no category are rejected.
///
/// # Example
///
/// ```
/// use labor_cost_engine::models::{CategoryHours, HourCategory};
/// use rust_decimal::Decimal;
///
/// let hours = CategoryHours::default()
///     .with(HourCategory::Ordinary, Decimal::from(176))
///     .with(HourCategory::Night, Decimal::from(16));
///
/// assert_eq!(hours.get(HourCategory::Night), Decimal::from(16));
/// assert_eq!(hours.total(), Decimal::from(192));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryHours {
    /// Ordinary daytime hours.
    #[serde(default)]
    pub ordinary: Decimal,
    /// Daytime overtime hours.
    #[serde(default)]
    pub extra_daytime: Decimal,
    /// Ordinary night hours.
    #[serde(default)]
    pub night: Decimal,
    /// Night overtime hours.
    #[serde(default)]
    pub extra_night: Decimal,
    /// Sunday or public holiday hours.
    #[serde(default)]
    pub sunday_holiday: Decimal,
    /// Sunday or public holiday overtime hours.
    #[serde(default)]
    pub extra_sunday_holiday: Decimal,
}

/// Hours one employee works in one calendar month.
pub type MonthlyHours = CategoryHours;

/// Hours a uniform headcount works per week, held constant over a projection.
pub type WeeklyHours = CategoryHours;

impl CategoryHours {
    /// Returns the hours recorded for `category`.
    pub fn get(&self, category: HourCategory) -> Decimal {
        match category {
            HourCategory::Ordinary => self.ordinary,
            HourCategory::ExtraDaytime => self.extra_daytime,
            HourCategory::Night => self.night,
            HourCategory::ExtraNight => self.extra_night,
            HourCategory::SundayHoliday => self.sunday_holiday,
            HourCategory::ExtraSundayHoliday => self.extra_sunday_holiday,
        }
    }

    /// Returns a copy with `category` set to `hours`.
    pub fn with(mut self, category: HourCategory, hours: Decimal) -> Self {
        let slot = match category {
            HourCategory::Ordinary => &mut self.ordinary,
            HourCategory::ExtraDaytime => &mut self.extra_daytime,
            HourCategory::Night => &mut self.night,
            HourCategory::ExtraNight => &mut self.extra_night,
            HourCategory::SundayHoliday => &mut self.sunday_holiday,
            HourCategory::ExtraSundayHoliday => &mut self.extra_sunday_holiday,
        };
        *slot = hours;
        self
    }

    /// Iterates `(category, hours)` pairs in [`HourCategory::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (HourCategory, Decimal)> + '_ {
        HourCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Sum of hours across all categories.
    pub fn total(&self) -> Decimal {
        self.iter().map(|(_, hours)| hours).sum()
    }
}
