//! `ForecastCurveFromDiscount`: index forwards implied by a discount curve.

use crate::curve::Curve;
use crate::description::FloatingRateSourceDescription;
use crate::discounting_source::DiscountingSource;
use crate::float_rate_index::FloatRateIndex;
use crate::floating_rate_source::FloatingRateSource;
use crate::market_data_source::MarketDataSource;
use qsa_core::errors::Result;
use qsa_core::{ensure, Rate, Real};
use qsa_time::Date;
use std::sync::Arc;

/// Forward rates of an index implied by a discount curve after its anchor
/// date, and taken from a fixing source on or before it.
///
/// For `date > anchor`, with `later = date + index tenor`:
///
/// `fwd = (df(date) / df(later) − 1) / ((later − date) / 365)`
#[derive(Debug, Clone)]
pub struct ForecastCurveFromDiscount {
    discount_curve: Arc<dyn DiscountingSource>,
    index: FloatRateIndex,
    fixing_curve: Arc<dyn FloatingRateSource>,
}

impl ForecastCurveFromDiscount {
    /// Forecast `index` off `discount_curve`, reading past fixings from
    /// `fixing_curve`.
    pub fn new(
        discount_curve: Arc<dyn DiscountingSource>,
        index: FloatRateIndex,
        fixing_curve: Arc<dyn FloatingRateSource>,
    ) -> Self {
        Self {
            discount_curve,
            index,
            fixing_curve,
        }
    }
}

impl MarketDataSource for ForecastCurveFromDiscount {
    fn anchor_date(&self) -> Date {
        self.discount_curve.anchor_date()
    }

    fn name(&self) -> String {
        FloatingRateSourceDescription::new(&self.index).to_string()
    }
}

impl Curve for ForecastCurveFromDiscount {
    fn interp_at_date(&self, date: Date) -> Result<Real> {
        self.forward_rate(date)
    }
}

impl FloatingRateSource for ForecastCurveFromDiscount {
    fn floating_index(&self) -> &FloatRateIndex {
        &self.index
    }

    fn forward_rate(&self, date: Date) -> Result<Rate> {
        if date <= self.discount_curve.anchor_date() {
            return self.fixing_curve.forward_rate(date);
        }
        let later = date.add_tenor(self.index.tenor())?;
        ensure!(later > date, "index {} has a zero tenor", self.index);
        let df1 = self.discount_curve.get_df(date)?;
        let df2 = self.discount_curve.get_df(later)?;
        let dt = f64::from(later - date) / 365.0;
        Ok((df1 / df2 - 1.0) / dt)
    }
}
