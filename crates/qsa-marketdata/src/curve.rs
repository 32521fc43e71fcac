//! `Curve`: a market-data source that can be interpolated at any date.

use crate::market_data_source::MarketDataSource;
use qsa_core::errors::Result;
use qsa_core::Real;
use qsa_time::Date;

/// A date-indexed curve.
pub trait Curve: MarketDataSource {
    /// The curve value at `date`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`](qsa_core::Error::InvalidRange) if the
    /// curve is not defined at `date`.
    fn interp_at_date(&self, date: Date) -> Result<Real>;

    /// The curve value at each of `dates`, in input order.
    ///
    /// # Errors
    /// Fails on the first date the curve is not defined at.
    fn interp_at_dates(&self, dates: &[Date]) -> Result<Vec<Real>> {
        dates.iter().map(|&d| self.interp_at_date(d)).collect()
    }
}
