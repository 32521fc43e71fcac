//! # quantsa
//!
//! Dates, calendars, day-count, business-day and compounding conventions,
//! and the curves and market-data container that valuations read from.
//!
//! This crate is a **façade** that re-exports the public items of the
//! `qsa-*` workspace crates.
//!
//! ```rust
//! use quantsa::prelude::*;
//!
//! let d1 = Date::from_iso("2003-11-01").unwrap();
//! let d2 = Date::from_iso("2004-05-01").unwrap();
//! let yf = Actual365Fixed.year_fraction(d1, d2);
//! assert!((yf - 182.0 / 365.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, compounding, errors and result storage.
pub use qsa_core as core;

/// Dates, tenors, calendars, day counters and schedules.
pub use qsa_time as time;

/// One-dimensional interpolation.
pub use qsa_math as math;

/// Currencies, indices, curves and the market-data container.
pub use qsa_marketdata as marketdata;

/// The types most valuations need.
pub mod prelude {
    pub use qsa_core::{
        CompoundingConvention, DiscountFactor, Error, InMemoryResultStore, Rate, Real, Result,
        ResultStore, Time,
    };
    pub use qsa_marketdata::{
        Currency, Curve, CurveDescription, DatesAndRates, DiscountingSource,
        DiscountingSourceDescription, FloatRateIndex, FloatingRateSource,
        FloatingRateSourceDescription, ForecastCurve, ForecastCurveFromDiscount,
        MarketDataContainer, MarketDataSource, ShiftedDiscountSource, SingleRate,
        SingleRateFixings,
    };
    pub use qsa_time::{
        ActActIsda, Actual360, Actual365Fixed, Business252, BusinessDayConvention, Calendar,
        CalendarLoader, ConventionConfig, Conventions, Date, DayCounter, InMemoryCalendarLoader,
        InterestRate, Tenor, Thirty360Euro, TimeUnit, Weekday,
    };
}
