//! # qsa-marketdata
//!
//! Currencies, floating rate indices, curves, discounting and forecasting
//! sources, and the typed [`MarketDataContainer`] they are registered in.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The typed market-data registry.
pub mod container;

/// `Currency`.
pub mod currency;

/// `Curve` trait.
pub mod curve;

/// Zero rates on pillar dates.
pub mod dates_and_rates;

/// Typed market-data descriptions.
pub mod description;

/// `DiscountingSource` trait.
pub mod discounting_source;

/// `FloatRateIndex`.
pub mod float_rate_index;

/// `FloatingRateSource` trait.
pub mod floating_rate_source;

/// Forward rates of an index on pillar dates.
pub mod forecast_curve;

/// Index forwards implied by a discount curve.
pub mod forecast_curve_from_discount;

/// `MarketDataSource` base trait.
pub mod market_data_source;

/// Parallel-shifted discount curves.
pub mod shifted_discount_source;

/// Flat curves and fixings.
pub mod single_rate;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use container::MarketDataContainer;
pub use currency::Currency;
pub use curve::Curve;
pub use dates_and_rates::DatesAndRates;
pub use description::{
    CurveDescription, DiscountingSourceDescription, FloatingRateSourceDescription,
    MarketDataDescription, MarketDataEntry, MarketDataKind, MarketDataType,
};
pub use discounting_source::DiscountingSource;
pub use float_rate_index::FloatRateIndex;
pub use floating_rate_source::FloatingRateSource;
pub use forecast_curve::ForecastCurve;
pub use forecast_curve_from_discount::ForecastCurveFromDiscount;
pub use market_data_source::MarketDataSource;
pub use shifted_discount_source::ShiftedDiscountSource;
pub use single_rate::{SingleRate, SingleRateFixings};
