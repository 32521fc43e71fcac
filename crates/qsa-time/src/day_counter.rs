//! `DayCounter` trait and built-in day-count conventions.
//!
//! A day counter computes the **day count fraction**, the fraction of a year
//! between two dates, used when discounting or accruing interest.
//!
//! Every convention is antisymmetric: `year_fraction(d2, d1)` is exactly
//! `-year_fraction(d1, d2)`.

use crate::calendar::Calendar;
use crate::date::{is_leap_year, Date};
use qsa_core::errors::{Error, Result};
use qsa_core::{Real, Time};
use std::sync::Arc;

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Case-sensitive registry identifier (e.g. `"Actual365Fixed"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

impl<T: DayCounter + ?Sized> DayCounter for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (**self).day_count(d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        (**self).year_fraction(d1, d2)
    }
}

/// Registry identifier of [`Actual365Fixed`].
pub const ACTUAL_365_FIXED_NAME: &str = "Actual365Fixed";
/// Registry identifier of [`Actual360`].
pub const ACTUAL_360_NAME: &str = "Actual360";
/// Registry identifier of [`ActActIsda`].
pub const ACT_ACT_ISDA_NAME: &str = "ActActISDA";
/// Registry identifier of [`Thirty360Euro`].
pub const THIRTY_360_EURO_NAME: &str = "Thirty360Euro";
/// Registry identifier of [`Business252`].
pub const BUSINESS_252_NAME: &str = "Business252";

/// Shared Actual/365 (Fixed) instance.
pub static ACTUAL_365_FIXED: Actual365Fixed = Actual365Fixed;
/// Shared Actual/360 instance.
pub static ACTUAL_360: Actual360 = Actual360;
/// Shared Actual/Actual (ISDA) instance.
pub static ACT_ACT_ISDA: ActActIsda = ActActIsda;
/// Shared 30E/360 instance.
pub static THIRTY_360_EURO: Thirty360Euro = Thirty360Euro;

/// Look up one of the stateless day counters by name.
///
/// # Errors
/// Returns [`Error::UnknownConvention`] for unregistered names, and for
/// `"Business252"`, which needs a calendar (see [`Business252::new`]).
pub fn day_counter_by_name(name: &str) -> Result<&'static dyn DayCounter> {
    match name {
        ACTUAL_365_FIXED_NAME => Ok(&ACTUAL_365_FIXED),
        ACTUAL_360_NAME => Ok(&ACTUAL_360),
        ACT_ACT_ISDA_NAME => Ok(&ACT_ACT_ISDA),
        THIRTY_360_EURO_NAME => Ok(&THIRTY_360_EURO),
        BUSINESS_252_NAME => Err(Error::UnknownConvention(format!(
            "day count '{name}' must be built with a calendar"
        ))),
        _ => Err(Error::UnknownConvention(format!("day count '{name}'"))),
    }
}

fn actual_days(d1: Date, d2: Date) -> i64 {
    i64::from(d2 - d1)
}

/// Actual/365 (Fixed) day counter.
///
/// `year_fraction = actual_days / 365`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        ACTUAL_365_FIXED_NAME
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        actual_days(d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/360 day counter.
///
/// `year_fraction = actual_days / 360`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        ACTUAL_360_NAME
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        actual_days(d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Actual/Actual (ISDA) day counter.
///
/// Days falling in a leap year are weighted by 1/366, all others by 1/365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCounter for ActActIsda {
    fn name(&self) -> &str {
        ACT_ACT_ISDA_NAME
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        actual_days(d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        if d1 > d2 {
            return -self.year_fraction(d2, d1);
        }
        let days_in_year = |y: u16| if is_leap_year(y) { 366.0 } else { 365.0 };
        let (y1, y2) = (d1.year(), d2.year());
        let dib1 = days_in_year(y1);
        let dib2 = days_in_year(y2);
        // Days from d1 up to 1 January of the next year, and from 1 January
        // of y2 up to d2.
        let head = dib1 - Real::from(d1.day_of_year()) + 1.0;
        let tail = Real::from(d2.day_of_year()) - 1.0;
        Real::from(y2 - y1) - 1.0 + head / dib1 + tail / dib2
    }
}

/// 30E/360 (Eurobond basis) day counter.
///
/// `day_count = 360(Y2−Y1) + 30(M2−M1−1) + max(0, 30−D1) + min(30, D2)`
///
/// so 2008-02-28 to 2008-03-31 counts 32 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360Euro;

impl DayCounter for Thirty360Euro {
    fn name(&self) -> &str {
        THIRTY_360_EURO_NAME
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        if d1 > d2 {
            return -self.day_count(d2, d1);
        }
        let (y1, m1, dd1) = d1.ymd();
        let (y2, m2, dd2) = d2.ymd();
        let (y1, m1, dd1) = (i64::from(y1), i64::from(m1), i64::from(dd1));
        let (y2, m2, dd2) = (i64::from(y2), i64::from(m2), i64::from(dd2));
        360 * (y2 - y1) + 30 * (m2 - m1 - 1) + (30 - dd1).max(0) + dd2.min(30)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Business/252 day counter.
///
/// Counts the business days of a calendar in `(d1, d2]` and divides by 252.
#[derive(Debug, Clone)]
pub struct Business252 {
    calendar: Arc<Calendar>,
}

impl Business252 {
    /// Build the convention over `calendar`.
    pub fn new(calendar: Arc<Calendar>) -> Self {
        Self { calendar }
    }

    /// The calendar whose business days are counted.
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }
}

impl DayCounter for Business252 {
    fn name(&self) -> &str {
        BUSINESS_252_NAME
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        i64::from(self.calendar.business_days_between(d1, d2))
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 252.0
    }
}
