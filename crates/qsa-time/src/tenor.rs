//! `Tenor`: a calendar period made of years, months, weeks and days.

use crate::time_unit::TimeUnit;
use qsa_core::errors::{Error, Result};
use qsa_core::utilities::data_parsers::parse_tenor_string;
use serde::{Deserialize, Serialize};

/// A non-negative calendar period.
///
/// Two tenors are equal when they cover the same number of months
/// (`12·years + months`) and the same number of days (`7·weeks + days`),
/// so `"12M" == "1Y"` and `"7D" == "1W"`.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tenor {
    years: u32,
    months: u32,
    weeks: u32,
    days: u32,
}

impl Tenor {
    /// The zero tenor.
    pub const ZERO: Tenor = Tenor::new(0, 0, 0, 0);

    /// Create a tenor from its four components.
    pub const fn new(years: u32, months: u32, weeks: u32, days: u32) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
        }
    }

    /// `n` years.
    pub const fn from_years(n: u32) -> Self {
        Self::new(n, 0, 0, 0)
    }

    /// `n` months.
    pub const fn from_months(n: u32) -> Self {
        Self::new(0, n, 0, 0)
    }

    /// `n` weeks.
    pub const fn from_weeks(n: u32) -> Self {
        Self::new(0, 0, n, 0)
    }

    /// `n` days.
    pub const fn from_days(n: u32) -> Self {
        Self::new(0, 0, 0, n)
    }

    /// `n` units of `unit`.
    pub const fn from_unit(n: u32, unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Days => Self::from_days(n),
            TimeUnit::Weeks => Self::from_weeks(n),
            TimeUnit::Months => Self::from_months(n),
            TimeUnit::Years => Self::from_years(n),
        }
    }

    /// Parse the compact `{N}Y{N}M{N}W{N}D` form, e.g. `"1Y1M"` or `"3m"`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidTenor`] if `s` does not follow the grammar.
    pub fn parse(s: &str) -> Result<Self> {
        parse_tenor_string(s)
            .map(|(y, m, w, d)| Self::new(y, m, w, d))
            .ok_or_else(|| Error::InvalidTenor(format!("'{s}'")))
    }

    /// Years component.
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Months component.
    pub fn months(&self) -> u32 {
        self.months
    }

    /// Weeks component.
    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    /// Days component.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// `12·years + months`.
    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * 12 + u64::from(self.months)
    }

    /// `7·weeks + days`.
    pub fn total_days(&self) -> u64 {
        u64::from(self.weeks) * 7 + u64::from(self.days)
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        self.total_months() == 0 && self.total_days() == 0
    }
}

impl PartialEq for Tenor {
    fn eq(&self, other: &Self) -> bool {
        self.total_months() == other.total_months() && self.total_days() == other.total_days()
    }
}

impl Eq for Tenor {}

impl std::hash::Hash for Tenor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.total_months().hash(state);
        self.total_days().hash(state);
    }
}

impl std::str::FromStr for Tenor {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Tenor {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Tenor> for String {
    fn from(t: Tenor) -> String {
        t.to_string()
    }
}

impl std::fmt::Display for Tenor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("0D");
        }
        for (n, unit) in [
            (self.years, TimeUnit::Years),
            (self.months, TimeUnit::Months),
            (self.weeks, TimeUnit::Weeks),
            (self.days, TimeUnit::Days),
        ] {
            if n != 0 {
                write!(f, "{n}{}", unit.symbol())?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Tenor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tenor({self})")
    }
}
