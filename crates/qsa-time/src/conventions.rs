//! Convention bundles resolved from configuration.
//!
//! A [`ConventionConfig`] names a day count, a business-day convention, a
//! compounding convention and a calendar.  [`ConventionConfig::resolve`]
//! turns those names into live [`Conventions`] using the name registries and
//! a [`CalendarLoader`].

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::{Calendar, WEEKENDS_ONLY};
use crate::calendar_loader::CalendarLoader;
use crate::date::Date;
use crate::day_counter::{day_counter_by_name, Business252, DayCounter, BUSINESS_252_NAME};
use qsa_core::errors::Result;
use qsa_core::{CompoundingConvention, Time};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

fn default_calendar() -> String {
    WEEKENDS_ONLY.to_string()
}

/// Convention names as they appear in configuration.
///
/// ```
/// use qsa_time::conventions::ConventionConfig;
/// let cfg: ConventionConfig = serde_json::from_str(
///     r#"{"day_count":"Actual365Fixed","business_day":"ModifiedFollowing","compounding":"Continuous"}"#,
/// ).unwrap();
/// assert_eq!(cfg.calendar, "WeekendsOnly");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionConfig {
    /// Day-count registry name, e.g. `"ActActISDA"`.
    pub day_count: String,
    /// Business-day convention name, e.g. `"ModifiedFollowing"`.
    pub business_day: String,
    /// Compounding convention name, e.g. `"Continuous"`.
    pub compounding: String,
    /// Calendar name, resolved through a [`CalendarLoader`].
    #[serde(default = "default_calendar")]
    pub calendar: String,
}

impl ConventionConfig {
    /// Resolve the names into live conventions.
    ///
    /// # Errors
    /// Returns [`Error::UnknownCalendar`](qsa_core::Error::UnknownCalendar)
    /// if the loader cannot resolve the calendar, and
    /// [`Error::UnknownConvention`](qsa_core::Error::UnknownConvention) for
    /// an unregistered day count, business-day or compounding name.
    pub fn resolve(&self, loader: &dyn CalendarLoader) -> Result<Conventions> {
        let business_day = BusinessDayConvention::from_name(&self.business_day).inspect_err(|_| {
            warn!(name = %self.business_day, "unknown business day convention");
        })?;
        let compounding = CompoundingConvention::from_name(&self.compounding).inspect_err(|_| {
            warn!(name = %self.compounding, "unknown compounding convention");
        })?;
        let calendar = loader.load_calendar(&self.calendar)?;
        let day_counter: Arc<dyn DayCounter> = if self.day_count == BUSINESS_252_NAME {
            Arc::new(Business252::new(Arc::clone(&calendar)))
        } else {
            let dc = day_counter_by_name(&self.day_count).inspect_err(|_| {
                warn!(name = %self.day_count, "unknown day count convention");
            })?;
            Arc::new(dc)
        };
        Ok(Conventions {
            day_counter,
            business_day,
            compounding,
            calendar,
        })
    }
}

/// A resolved set of conventions for one market.
#[derive(Debug, Clone)]
pub struct Conventions {
    day_counter: Arc<dyn DayCounter>,
    business_day: BusinessDayConvention,
    compounding: CompoundingConvention,
    calendar: Arc<Calendar>,
}

impl Conventions {
    /// Bundle already-built conventions.
    pub fn new(
        day_counter: Arc<dyn DayCounter>,
        business_day: BusinessDayConvention,
        compounding: CompoundingConvention,
        calendar: Arc<Calendar>,
    ) -> Self {
        Self {
            day_counter,
            business_day,
            compounding,
            calendar,
        }
    }

    /// Day counter.
    pub fn day_counter(&self) -> &dyn DayCounter {
        &*self.day_counter
    }

    /// Shared handle to the day counter.
    pub fn day_counter_arc(&self) -> Arc<dyn DayCounter> {
        Arc::clone(&self.day_counter)
    }

    /// Business-day convention.
    pub fn business_day(&self) -> BusinessDayConvention {
        self.business_day
    }

    /// Compounding convention.
    pub fn compounding(&self) -> CompoundingConvention {
        self.compounding
    }

    /// Calendar.
    pub fn calendar(&self) -> &Arc<Calendar> {
        &self.calendar
    }

    /// Adjust `date` with the business-day convention on the calendar.
    pub fn adjust(&self, date: Date) -> Result<Date> {
        self.business_day.adjust(date, &self.calendar)
    }

    /// Year fraction between two dates under the day count.
    pub fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_counter.year_fraction(d1, d2)
    }

    /// The names these conventions were resolved from.
    pub fn config(&self) -> ConventionConfig {
        ConventionConfig {
            day_count: self.day_counter.name().to_string(),
            business_day: self.business_day.name().to_string(),
            compounding: self.compounding.name().to_string(),
            calendar: self.calendar.name().to_string(),
        }
    }
}
