//! `SingleRate`: a flat discount curve, and `SingleRateFixings`: a flat
//! source of index fixings.
//!
//! Both are the simplest sources a container can hold and are mainly used to
//! set up pricing tests.

use crate::currency::Currency;
use crate::curve::Curve;
use crate::description::{DiscountingSourceDescription, FloatingRateSourceDescription};
use crate::discounting_source::{check_not_before_anchor, continuous_df, DiscountingSource};
use crate::float_rate_index::FloatRateIndex;
use crate::floating_rate_source::FloatingRateSource;
use crate::market_data_source::MarketDataSource;
use qsa_core::errors::Result;
use qsa_core::{DiscountFactor, Rate, Real};
use qsa_time::Date;

/// A discount curve with one continuously compounded Actual/365 rate.
///
/// `get_df(d) = exp(-rate · (d − anchor) / 365)`
#[derive(Debug, Clone)]
pub struct SingleRate {
    anchor_date: Date,
    rate: Rate,
    currency: Currency,
}

impl SingleRate {
    /// A flat curve at `rate`, anchored at `anchor_date`.
    pub fn new(rate: Rate, anchor_date: Date, currency: Currency) -> Self {
        Self {
            anchor_date,
            rate,
            currency,
        }
    }

    /// The flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl MarketDataSource for SingleRate {
    fn anchor_date(&self) -> Date {
        self.anchor_date
    }

    fn name(&self) -> String {
        DiscountingSourceDescription::new(&self.currency).to_string()
    }
}

impl Curve for SingleRate {
    fn interp_at_date(&self, _date: Date) -> Result<Real> {
        Ok(self.rate)
    }
}

impl DiscountingSource for SingleRate {
    fn currency(&self) -> &Currency {
        &self.currency
    }

    fn get_df(&self, date: Date) -> Result<DiscountFactor> {
        check_not_before_anchor(&self.name(), self.anchor_date, date)?;
        Ok(continuous_df(self.rate, self.anchor_date, date))
    }
}

/// Every fixing of an index, past or future, at one rate.
#[derive(Debug, Clone)]
pub struct SingleRateFixings {
    anchor_date: Date,
    rate: Rate,
    index: FloatRateIndex,
}

impl SingleRateFixings {
    /// Fix `index` at `rate` on every date.
    pub fn new(rate: Rate, anchor_date: Date, index: FloatRateIndex) -> Self {
        Self {
            anchor_date,
            rate,
            index,
        }
    }
}

impl MarketDataSource for SingleRateFixings {
    fn anchor_date(&self) -> Date {
        self.anchor_date
    }

    fn name(&self) -> String {
        FloatingRateSourceDescription::new(&self.index).to_string()
    }
}

impl FloatingRateSource for SingleRateFixings {
    fn floating_index(&self) -> &FloatRateIndex {
        &self.index
    }

    fn forward_rate(&self, _date: Date) -> Result<Rate> {
        Ok(self.rate)
    }
}
