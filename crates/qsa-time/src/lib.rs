//! # qsa-time
//!
//! Date, tenor, calendar, day counter, business-day convention and
//! schedule types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Named holiday calendars.
pub mod calendar;

/// Calendar lookup by name.
pub mod calendar_loader;

/// Convention bundles resolved from configuration.
pub mod conventions;

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// Interest rate with compounding and day-count conventions.
pub mod interest_rate;

/// Unadjusted accrual schedules.
pub mod schedule;

/// `Tenor`: years, months, weeks and days.
pub mod tenor;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, CalendarDefinition};
pub use calendar_loader::{CalendarLoader, InMemoryCalendarLoader};
pub use conventions::{ConventionConfig, Conventions};
pub use date::Date;
pub use day_counter::{
    day_counter_by_name, ActActIsda, Actual360, Actual365Fixed, Business252, DayCounter,
    Thirty360Euro,
};
pub use interest_rate::InterestRate;
pub use schedule::{dates_no_holidays, rolled_dates_no_holidays, Schedule};
pub use tenor::Tenor;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
