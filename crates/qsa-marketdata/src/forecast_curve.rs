//! `ForecastCurve`: forward rates of one index on pillar dates.

use crate::curve::Curve;
use crate::description::FloatingRateSourceDescription;
use crate::float_rate_index::FloatRateIndex;
use crate::floating_rate_source::FloatingRateSource;
use crate::market_data_source::MarketDataSource;
use qsa_core::errors::Result;
use qsa_core::{ensure, Rate, Real};
use qsa_math::{Extrapolation, Interpolation1D, LinearInterpolation};
use qsa_time::Date;
use tracing::debug;

/// Forward rates of `index` on pillar dates, linearly interpolated in the
/// date serial and held flat outside the pillars.
#[derive(Debug, Clone)]
pub struct ForecastCurve {
    anchor_date: Date,
    index: FloatRateIndex,
    dates: Vec<Date>,
    rates: Vec<Rate>,
    interp: LinearInterpolation,
}

impl ForecastCurve {
    /// Build the curve.
    ///
    /// # Errors
    /// Fails if `dates` is empty, the lengths differ or the dates are not
    /// strictly increasing.
    pub fn new(
        anchor_date: Date,
        index: FloatRateIndex,
        dates: &[Date],
        rates: &[Rate],
    ) -> Result<Self> {
        ensure!(
            dates.len() == rates.len(),
            "{} dates but {} rates",
            dates.len(),
            rates.len()
        );
        let xs: Vec<Real> = dates.iter().map(|d| Real::from(d.serial())).collect();
        let interp = LinearInterpolation::new(&xs, rates)?.with_extrapolation(Extrapolation::Flat);
        debug!(%index, %anchor_date, pillars = dates.len(), "built forecast curve");
        Ok(Self {
            anchor_date,
            index,
            dates: dates.to_vec(),
            rates: rates.to_vec(),
            interp,
        })
    }

    /// Pillar dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Forward rates at the pillars.
    pub fn rates(&self) -> &[Rate] {
        &self.rates
    }
}

impl MarketDataSource for ForecastCurve {
    fn anchor_date(&self) -> Date {
        self.anchor_date
    }

    fn name(&self) -> String {
        FloatingRateSourceDescription::new(&self.index).to_string()
    }
}

impl Curve for ForecastCurve {
    fn interp_at_date(&self, date: Date) -> Result<Real> {
        Ok(self.interp.operator(Real::from(date.serial())))
    }
}

impl FloatingRateSource for ForecastCurve {
    fn floating_index(&self) -> &FloatRateIndex {
        &self.index
    }

    fn forward_rate(&self, date: Date) -> Result<Rate> {
        self.interp_at_date(date)
    }
}
