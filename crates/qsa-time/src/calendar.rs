//! `Calendar`: a named holiday set on top of Saturday/Sunday weekends.
//!
//! Calendars are immutable once built and are shared behind [`Arc`] by the
//! conventions and curves that need them.

use crate::date::Date;
use qsa_core::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock};

/// Name of the shared calendar with no holidays.
pub const WEEKENDS_ONLY: &str = "WeekendsOnly";

static WEEKENDS_ONLY_CALENDAR: LazyLock<Arc<Calendar>> =
    LazyLock::new(|| Arc::new(Calendar::new(WEEKENDS_ONLY, [])));

/// A financial calendar.
///
/// Saturdays and Sundays are never business days; the holiday set adds
/// further non-business days.  An empty holiday set still excludes weekends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CalendarDefinition", into = "CalendarDefinition")]
pub struct Calendar {
    name: String,
    holidays: BTreeSet<Date>,
}

/// Serialised form of a [`Calendar`]: a name and a list of holiday dates.
///
/// ```
/// use qsa_time::calendar::{Calendar, CalendarDefinition};
/// let def: CalendarDefinition =
///     serde_json::from_str(r#"{"name":"ZAR","holidays":["2008-03-21"]}"#).unwrap();
/// let cal = Calendar::from(def);
/// assert_eq!(cal.holidays().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDefinition {
    /// Calendar name.
    pub name: String,
    /// Holiday dates; duplicates are collapsed.
    #[serde(default)]
    pub holidays: Vec<Date>,
}

impl Calendar {
    /// Create a calendar from a name and a holiday list.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// The process-wide calendar named `"WeekendsOnly"` with no holidays.
    pub fn weekends_only() -> Arc<Calendar> {
        Arc::clone(&WEEKENDS_ONLY_CALENDAR)
    }

    /// Calendar name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Holiday dates in ascending order.
    pub fn holidays(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    pub fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is in the holiday set.  Weekends are not
    /// holidays unless listed explicitly.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    pub fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// First business day on or after `date`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`](qsa_core::Error::InvalidDate) if the
    /// search runs past [`Date::MAX`].
    pub fn following(&self, date: Date) -> Result<Date> {
        self.walk_to_business_day(date, 1)
    }

    /// Last business day on or before `date`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`](qsa_core::Error::InvalidDate) if the
    /// search runs past [`Date::MIN`].
    pub fn preceding(&self, date: Date) -> Result<Date> {
        self.walk_to_business_day(date, -1)
    }

    fn walk_to_business_day(&self, mut date: Date, step: i32) -> Result<Date> {
        while !self.is_business_day(date) {
            date = date.add_days(step)?;
        }
        Ok(date)
    }

    /// Last business day of the month containing `date`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`](qsa_core::Error::InvalidDate) if no
    /// representable business day precedes the month end.
    pub fn end_of_month(&self, date: Date) -> Result<Date> {
        self.preceding(date.end_of_month())
    }

    /// Return `true` if `date` is the last business day of its month.
    pub fn is_end_of_month(&self, date: Date) -> bool {
        self.end_of_month(date).is_ok_and(|eom| eom == date)
    }

    /// Advance `date` by `n` business days (backwards if `n < 0`).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`](qsa_core::Error::InvalidDate) if the
    /// result is out of range.
    pub fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the business days in `(d1, d2]`.
    ///
    /// Returns the negated count over `(d2, d1]` if `d2 < d1`, and 0 for
    /// equal dates.
    pub fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = (start.serial() + 1..=end.serial())
            .map(Date::from_serial_unchecked)
            .filter(|&d| self.is_business_day(d))
            .count();
        sign * count as i32
    }

    /// The serialisable definition of this calendar.
    pub fn definition(&self) -> CalendarDefinition {
        CalendarDefinition {
            name: self.name.clone(),
            holidays: self.holidays().collect(),
        }
    }
}

impl From<CalendarDefinition> for Calendar {
    fn from(def: CalendarDefinition) -> Self {
        Calendar::new(def.name, def.holidays)
    }
}

impl From<Calendar> for CalendarDefinition {
    fn from(cal: Calendar) -> Self {
        CalendarDefinition {
            name: cal.name,
            holidays: cal.holidays.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
