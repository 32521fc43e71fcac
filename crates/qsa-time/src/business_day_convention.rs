//! Business-day conventions.

use crate::calendar::Calendar;
use crate::date::Date;
use qsa_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// How to adjust a date that falls on a non-business day.
///
/// Serialises as its registry name (`"ModifiedFollowing"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given holiday.
    Following,
    /// Choose the first business day after the given holiday unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the holiday.
    ModifiedFollowing,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Choose the first business day before the given holiday unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the holiday.
    ModifiedPreceding,
    /// Do not adjust (keep the original date).
    Unadjusted,
}

impl BusinessDayConvention {
    /// Every convention, in registry order.
    pub const ALL: [BusinessDayConvention; 5] = [
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedFollowing,
        BusinessDayConvention::Preceding,
        BusinessDayConvention::ModifiedPreceding,
        BusinessDayConvention::Unadjusted,
    ];

    /// Case-sensitive registry identifier.
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "ModifiedFollowing",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "ModifiedPreceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        }
    }

    /// Look a convention up by name.
    ///
    /// # Errors
    /// Returns [`Error::UnknownConvention`] if no convention has that name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::UnknownConvention(format!("business day '{name}'")))
    }

    /// Adjust `date` to a business day of `calendar`.
    ///
    /// Terminates as long as the calendar has no unbounded run of
    /// consecutive non-business days.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the search leaves the representable
    /// date range.
    pub fn adjust(&self, date: Date, calendar: &Calendar) -> Result<Date> {
        match self {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => calendar.following(date),
            BusinessDayConvention::Preceding => calendar.preceding(date),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = calendar.following(date);
                match adjusted {
                    Ok(d) if d.month() == date.month() => Ok(d),
                    _ => calendar.preceding(date),
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = calendar.preceding(date);
                match adjusted {
                    Ok(d) if d.month() == date.month() => Ok(d),
                    _ => calendar.following(date),
                }
            }
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BusinessDayConvention {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
