//! Hour categories and their statutory multipliers.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of hour worked, which determines the multiplier applied to the
/// hourly rate.
///
/// # Example
///
/// ```
/// use labor_cost_engine::models::HourCategory;
/// use rust_decimal::Decimal;
///
/// assert_eq!(HourCategory::Night.multiplier(), Decimal::new(135, 2));
/// assert_eq!(HourCategory::ALL.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourCategory {
    /// Ordinary daytime hours.
    Ordinary,
    /// Daytime overtime.
    ExtraDaytime,
    /// Ordinary night hours.
    Night,
    /// Night overtime.
    ExtraNight,
    /// Hours worked on a Sunday or public holiday.
    SundayHoliday,
    /// Overtime on a Sunday or public holiday.
    ExtraSundayHoliday,
}

impl HourCategory {
    /// Every category, in display order.
    pub const ALL: [HourCategory; 6] = [
        HourCategory::Ordinary,
        HourCategory::ExtraDaytime,
        HourCategory::Night,
        HourCategory::ExtraNight,
        HourCategory::SundayHoliday,
        HourCategory::ExtraSundayHoliday,
    ];

    /// The multiplier applied to the hourly rate for this category.
    pub fn multiplier(self) -> Decimal {
        match self {
            HourCategory::Ordinary => Decimal::new(100, 2),
            HourCategory::ExtraDaytime => Decimal::new(125, 2),
            HourCategory::Night => Decimal::new(135, 2),
            HourCategory::ExtraNight => Decimal::new(175, 2),
            HourCategory::SundayHoliday => Decimal::new(200, 2),
            HourCategory::ExtraSundayHoliday => Decimal::new(250, 2),
        }
    }

    /// The snake_case key used in JSON payloads and field paths.
    pub fn key(self) -> &'static str {
        match self {
            HourCategory::Ordinary => "ordinary",
            HourCategory::ExtraDaytime => "extra_daytime",
            HourCategory::Night => "night",
            HourCategory::ExtraNight => "extra_night",
            HourCategory::SundayHoliday => "sunday_holiday",
            HourCategory::ExtraSundayHoliday => "extra_sunday_holiday",
        }
    }
}

impl fmt::Display for HourCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(HourCategory::Ordinary.multiplier(), dec("1.00"));
        assert_eq!(HourCategory::ExtraDaytime.multiplier(), dec("1.25"));
        assert_eq!(HourCategory::Night.multiplier(), dec("1.35"));
        assert_eq!(HourCategory::ExtraNight.multiplier(), dec("1.75"));
        assert_eq!(HourCategory::SundayHoliday.multiplier(), dec("2.00"));
        assert_eq!(HourCategory::ExtraSundayHoliday.multiplier(), dec("2.50"));
    }

    #[test]
    fn test_multipliers_never_below_ordinary() {
        for category in HourCategory::ALL {
            assert!(category.multiplier() >= HourCategory::Ordinary.multiplier());
        }
    }

    #[test]
    fn test_serialization_matches_key() {
        for category in HourCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn test_deserialize_from_key() {
        let category: HourCategory = serde_json::from_str("\"extra_sunday_holiday\"").unwrap();
        assert_eq!(category, HourCategory::ExtraSundayHoliday);
    }
}
