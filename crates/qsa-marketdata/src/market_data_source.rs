//! `MarketDataSource`: base trait for everything a `MarketDataContainer`
//! can hold.

use qsa_time::Date;

/// A piece of market data anchored at a date.
pub trait MarketDataSource: std::fmt::Debug + Send + Sync {
    /// The as-of date from which the source's values are defined.
    fn anchor_date(&self) -> Date;

    /// Name of the description this source is meant to be registered under,
    /// e.g. `"DiscountingSource.ZAR"`.
    fn name(&self) -> String;
}
