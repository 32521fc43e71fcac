//! `FloatingRateSource`: forecasts of a floating rate index.

use crate::float_rate_index::FloatRateIndex;
use crate::market_data_source::MarketDataSource;
use qsa_core::errors::Result;
use qsa_core::Rate;
use qsa_time::Date;

/// A source of forward rates (or past fixings) for one index.
pub trait FloatingRateSource: MarketDataSource {
    /// The index this source forecasts.
    fn floating_index(&self) -> &FloatRateIndex;

    /// The rate that fixes (or fixed) on `date`.
    ///
    /// # Errors
    /// Returns an error if the source cannot supply a rate for `date`.
    fn forward_rate(&self, date: Date) -> Result<Rate>;
}
