//! `Date` type.
//!
//! Dates are whole days represented as a serial number.
//!
//! # Serial number convention
//! * The epoch is **December 30, 1899**, so serial numbers coincide with
//!   spreadsheet date serials (2000-01-01 = 36526).
//! * Differences of serial numbers are day counts.
//! * The valid date range is 1900-03-01 (serial 61) to 9999-12-31
//!   (serial 2 958 465); the fictitious 1900-02-29 of spreadsheet serials is
//!   never representable.

use crate::tenor::Tenor;
use crate::weekday::Weekday;
use qsa_core::errors::{Error, Result};
use qsa_core::utilities::data_parsers::parse_iso_date;
use serde::{Deserialize, Serialize};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: March 1, 1900.
    pub const MIN: Date = Date(61);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(2_958_465);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if `serial` is outside
    /// [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::InvalidDate(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] for impossible combinations such as
    /// February 30, or for dates outside the valid range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        let serial = serial_from_ymd(i64::from(year), i64::from(month), i64::from(day));
        if serial < i64::from(Self::MIN.0) || serial > i64::from(Self::MAX.0) {
            return Err(Error::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02} outside [{}, {}]",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Date(serial as i32))
    }

    /// Parse a strict ISO 8601 `yyyy-MM-dd` string.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDateFormat`] on malformed input and on
    /// well-formed strings that name a non-existent day (e.g. `2008-02-30`).
    pub fn from_iso(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)
            .ok_or_else(|| Error::InvalidDateFormat(format!("'{s}' is not yyyy-MM-dd")))?;
        Self::from_ymd(y, m, d).map_err(|e| Error::InvalidDateFormat(format!("'{s}': {e}")))
    }

    /// Create a date from a serial known to be in range.
    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "invalid date serial {serial}"
        );
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (i64::from(self.0) - serial_from_ymd(i64::from(y), 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 2 (1900-01-01) is a Monday.
        Weekday::from_days_after_monday((self.0 - 2).rem_euclid(7))
    }

    /// Whether the date falls in a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Number of days in the month containing this date.
    pub fn days_in_month(&self) -> u8 {
        let (y, m, _) = ymd_from_serial(self.0);
        days_in_month(y, m)
    }

    // ── Comparison ────────────────────────────────────────────────────────────

    /// Return `true` if `self` is the same day as `other` or earlier.
    pub fn on_or_before(&self, other: Date) -> bool {
        self.0 <= other.0
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::InvalidDate(format!("{self} + {n} days overflows")))?;
        Self::from_serial(serial)
    }

    /// Advance by `n` months.
    ///
    /// If the day-of-month does not exist in the target month the result is
    /// clamped to the last day of that month (Jan 31 + 1M = Feb 28/29).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the result is out of range.
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = ymd_from_serial(self.0);
        let total = i64::from(y) * 12 + i64::from(m) - 1 + i64::from(n);
        let new_y = total.div_euclid(12);
        let new_m = (total.rem_euclid(12) + 1) as u8;
        if !(1900..=9999).contains(&new_y) {
            return Err(Error::InvalidDate(format!(
                "{self} + {n} months: year {new_y} out of range"
            )));
        }
        let new_y = new_y as u16;
        Self::from_ymd(new_y, new_m, d.min(days_in_month(new_y, new_m)))
    }

    /// Advance by `n` years, clamping Feb 29 to Feb 28 in non-leap years.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the result is out of range.
    pub fn add_years(self, n: i32) -> Result<Self> {
        let n = n
            .checked_mul(12)
            .ok_or_else(|| Error::InvalidDate(format!("{self} + {n} years overflows")))?;
        self.add_months(n)
    }

    /// Advance by a [`Tenor`].
    ///
    /// Years are applied first, then months (each clamping to month end), then
    /// `7·weeks + days` calendar days.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if any intermediate result is out of range.
    pub fn add_tenor(self, tenor: &Tenor) -> Result<Self> {
        let out_of_range = || Error::InvalidDate(format!("{self} + {tenor} out of range"));
        let years = i32::try_from(tenor.years()).map_err(|_| out_of_range())?;
        let months = i32::try_from(tenor.months()).map_err(|_| out_of_range())?;
        let days = i32::try_from(tenor.total_days()).map_err(|_| out_of_range())?;
        self.add_years(years)?.add_months(months)?.add_days(days)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(i64::from(y), i64::from(m), i64::from(days_in_month(y, m))) as i32)
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl std::str::FromStr for Date {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_iso(s)
    }
}

impl TryFrom<String> for Date {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        Self::from_iso(&s)
    }
}

impl From<Date> for String {
    fn from(d: Date) -> String {
        d.to_string()
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Serial of 1970-01-01.
const UNIX_EPOCH_SERIAL: i64 = 25_569;

/// Convert (year, month, day) to a serial number.
///
/// Days-from-civil on the proleptic Gregorian calendar, shifted so that
/// 1899-12-30 is serial 0.
fn serial_from_ymd(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + UNIX_EPOCH_SERIAL
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = i64::from(serial) - UNIX_EPOCH_SERIAL + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
