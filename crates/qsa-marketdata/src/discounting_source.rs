//! `DiscountingSource`: discount factors in one currency.

use crate::currency::Currency;
use crate::curve::Curve;
use qsa_core::errors::{Error, Result};
use qsa_core::DiscountFactor;
use qsa_time::Date;

/// A curve that supplies discount factors.
///
/// As a [`Curve`], a discounting source interpolates to its continuously
/// compounded Actual/365 zero rate, so that
/// `get_df(d) == exp(-interp_at_date(d) · (d − anchor) / 365)`.
pub trait DiscountingSource: Curve {
    /// Currency of the cashflows this source discounts.
    fn currency(&self) -> &Currency;

    /// Discount factor from the anchor date to `date`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] for dates before the anchor date.
    fn get_df(&self, date: Date) -> Result<DiscountFactor>;

    /// Discount factors at each of `dates`, in input order.
    ///
    /// # Errors
    /// Fails on the first date before the anchor date.
    fn get_dfs(&self, dates: &[Date]) -> Result<Vec<DiscountFactor>> {
        dates.iter().map(|&d| self.get_df(d)).collect()
    }
}

/// Fails with [`Error::InvalidRange`] if `date` is before `anchor`.
pub(crate) fn check_not_before_anchor(name: &str, anchor: Date, date: Date) -> Result<()> {
    if date < anchor {
        return Err(Error::InvalidRange(format!(
            "{name}: discount factors are only defined on or after the anchor date {anchor}, got {date}"
        )));
    }
    Ok(())
}

/// Discount factor of a continuously compounded Actual/365 rate.
pub(crate) fn continuous_df(rate: f64, anchor: Date, date: Date) -> DiscountFactor {
    (-rate * f64::from(date - anchor) / 365.0).exp()
}
