//! `ShiftedDiscountSource`: a discount curve with a parallel rate bump.

use crate::currency::Currency;
use crate::curve::Curve;
use crate::discounting_source::DiscountingSource;
use crate::market_data_source::MarketDataSource;
use qsa_core::errors::Result;
use qsa_core::{DiscountFactor, Rate, Real};
use qsa_time::Date;
use std::sync::Arc;

/// Wraps a discounting source and lowers its continuously compounded
/// Actual/365 zero rate by `bump` at every date:
///
/// `df(d) = df_underlying(d) · exp(bump · (d − anchor) / 365)`
///
/// The wrapper keeps the underlying source's name, so it can stand in for
/// it in a bumped copy of a container.
#[derive(Debug, Clone)]
pub struct ShiftedDiscountSource {
    underlying: Arc<dyn DiscountingSource>,
    bump: Rate,
}

impl ShiftedDiscountSource {
    /// Shift `underlying` by the effective rate `bump`.
    pub fn new(underlying: Arc<dyn DiscountingSource>, bump: Rate) -> Self {
        Self { underlying, bump }
    }

    /// The effective rate bump.
    pub fn bump(&self) -> Rate {
        self.bump
    }
}

impl MarketDataSource for ShiftedDiscountSource {
    fn anchor_date(&self) -> Date {
        self.underlying.anchor_date()
    }

    fn name(&self) -> String {
        self.underlying.name()
    }
}

impl Curve for ShiftedDiscountSource {
    fn interp_at_date(&self, date: Date) -> Result<Real> {
        Ok(self.underlying.interp_at_date(date)? - self.bump)
    }
}

impl DiscountingSource for ShiftedDiscountSource {
    fn currency(&self) -> &Currency {
        self.underlying.currency()
    }

    fn get_df(&self, date: Date) -> Result<DiscountFactor> {
        let df = self.underlying.get_df(date)?;
        let t = f64::from(date - self.anchor_date()) / 365.0;
        Ok(df * (self.bump * t).exp())
    }
}
