//! Calendar month model.
//!
//! This module contains the [`Month`] type used to label simulation rows and to
//! anchor date-dependent lookups to the first day of a month.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A calendar month, rendered and parsed as `YYYY-MM`.
///
/// Months order chronologically, so a `BTreeMap<Month, _>` iterates from the
/// earliest month to the latest.
///
/// # Example
///
/// ```
/// use labor_cost_engine::models::Month;
/// use chrono::NaiveDate;
///
/// let month: Month = "2025-07".parse().unwrap();
/// assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
/// assert_eq!(month.to_string(), "2025-07");
/// assert_eq!(month.next().to_string(), "2025-08");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month, returning `None` if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // Round-trip through chrono so out-of-range years are rejected too.
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Builds a month from compile-time literals already known to be valid.
    pub(crate) const fn from_literal(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month, used as the anchor for base-hour lookups.
    ///
    /// A month past either end of chrono's calendar, which only [`Month::next`]
    /// can produce, clamps to the nearest representable date.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(if self.year > 0 {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        })
    }

    /// The month immediately after this one.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The twelve months of `year`, January first.
    ///
    /// Yields nothing for a year chrono cannot represent.
    pub fn months_of_year(year: i32) -> impl Iterator<Item = Month> {
        (1..=12).filter_map(move |month| Month::new(year, month))
    }

    /// Iterates every month from `start` to `end`, both inclusive.
    ///
    /// Yields nothing when `end` is before `start`.
    pub fn range_inclusive(start: Month, end: Month) -> impl Iterator<Item = Month> {
        std::iter::successors(Some(start), |m| Some(m.next())).take_while(move |m| *m <= end)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::validation("month", format!("'{}' is not a YYYY-MM label", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Month::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for Month {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}
