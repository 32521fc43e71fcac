//! `DatesAndRates`: a discount curve given as zero rates on pillar dates.

use crate::currency::Currency;
use crate::curve::Curve;
use crate::description::DiscountingSourceDescription;
use crate::discounting_source::{check_not_before_anchor, continuous_df, DiscountingSource};
use crate::market_data_source::MarketDataSource;
use qsa_core::errors::{Error, Result};
use qsa_core::{ensure, DiscountFactor, Rate, Real};
use qsa_math::{Extrapolation, Interpolation1D, LinearInterpolation};
use qsa_time::Date;
use tracing::debug;

/// Continuously compounded Actual/365 zero rates on pillar dates, linearly
/// interpolated in the date serial.
///
/// * If the first pillar is after the anchor date, the anchor is added as a
///   pillar carrying the first rate.
/// * If a maximum date is given, it is added as a pillar carrying the last
///   rate and the curve is undefined after it.
/// * Otherwise rates are extrapolated flat on both sides.
#[derive(Debug, Clone)]
pub struct DatesAndRates {
    currency: Currency,
    anchor_date: Date,
    dates: Vec<Date>,
    rates: Vec<Rate>,
    maximum_date: Option<Date>,
    interp: LinearInterpolation,
}

impl DatesAndRates {
    /// Build the curve.
    ///
    /// # Errors
    /// Fails if `dates` is empty, the lengths differ, the dates are not
    /// strictly increasing, the first date is before `anchor_date`, or
    /// `maximum_date` is before the last date.
    pub fn new(
        currency: Currency,
        anchor_date: Date,
        dates: &[Date],
        rates: &[Rate],
        maximum_date: Option<Date>,
    ) -> Result<Self> {
        ensure!(!dates.is_empty(), "a curve needs at least one date");
        ensure!(
            dates.len() == rates.len(),
            "{} dates but {} rates",
            dates.len(),
            rates.len()
        );
        ensure!(
            dates.windows(2).all(|w| w[0] < w[1]),
            "curve dates must be strictly increasing"
        );
        if dates[0] < anchor_date {
            return Err(Error::InvalidRange(format!(
                "first curve date {} is before the anchor date {anchor_date}",
                dates[0]
            )));
        }

        let mut dates = dates.to_vec();
        let mut rates = rates.to_vec();
        if dates[0] > anchor_date {
            dates.insert(0, anchor_date);
            rates.insert(0, rates[0]);
        }
        if let Some(max) = maximum_date {
            let (last_date, last_rate) = (dates[dates.len() - 1], rates[rates.len() - 1]);
            if max < last_date {
                return Err(Error::InvalidRange(format!(
                    "maximum date {max} is before the last curve date {last_date}"
                )));
            }
            if max > last_date {
                dates.push(max);
                rates.push(last_rate);
            }
        }

        let xs: Vec<Real> = dates.iter().map(|d| Real::from(d.serial())).collect();
        let interp = LinearInterpolation::new(&xs, &rates)?.with_extrapolation(Extrapolation::Flat);
        debug!(
            %currency,
            %anchor_date,
            pillars = dates.len(),
            "built dates-and-rates curve"
        );
        Ok(Self {
            currency,
            anchor_date,
            dates,
            rates,
            maximum_date,
            interp,
        })
    }

    /// Pillar dates, including any added anchor or maximum date.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Zero rates at [`dates`](Self::dates).
    pub fn rates(&self) -> &[Rate] {
        &self.rates
    }

    /// Last date the curve is defined on, if bounded.
    pub fn maximum_date(&self) -> Option<Date> {
        self.maximum_date
    }
}

impl MarketDataSource for DatesAndRates {
    fn anchor_date(&self) -> Date {
        self.anchor_date
    }

    fn name(&self) -> String {
        DiscountingSourceDescription::new(&self.currency).to_string()
    }
}

impl Curve for DatesAndRates {
    fn interp_at_date(&self, date: Date) -> Result<Real> {
        if let Some(max) = self.maximum_date {
            if date > max {
                return Err(Error::InvalidRange(format!(
                    "{}: {date} is after the maximum date {max}",
                    self.name()
                )));
            }
        }
        Ok(self.interp.operator(Real::from(date.serial())))
    }
}

impl DiscountingSource for DatesAndRates {
    fn currency(&self) -> &Currency {
        &self.currency
    }

    fn get_df(&self, date: Date) -> Result<DiscountFactor> {
        check_not_before_anchor(&self.name(), self.anchor_date, date)?;
        let rate = self.interp_at_date(date)?;
        Ok(continuous_df(rate, self.anchor_date, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn curve(max: Option<Date>) -> DatesAndRates {
        DatesAndRates::new(
            Currency::zar(),
            date(2016, 9, 17),
            &[date(2016, 12, 17), date(2017, 9, 17), date(2021, 9, 17)],
            &[0.07, 0.08, 0.09],
            max,
        )
        .unwrap()
    }

    #[test]
    fn anchor_pillar_is_added() {
        let c = curve(None);
        assert_eq!(c.dates()[0], date(2016, 9, 17));
        assert_eq!(c.rates()[0], 0.07);
        assert_eq!(c.dates().len(), 4);
    }

    #[test]
    fn linear_between_pillars() {
        let c = curve(None);
        let d1 = date(2016, 12, 17);
        let d2 = date(2017, 9, 17);
        let mid = Date::from_serial((d1.serial() + d2.serial()) / 2).unwrap();
        let w = f64::from(mid - d1) / f64::from(d2 - d1);
        assert_abs_diff_eq!(
            c.interp_at_date(mid).unwrap(),
            0.07 + w * 0.01,
            epsilon = 1e-12
        );
    }

    #[test]
    fn flat_outside_pillars() {
        let c = curve(None);
        assert_abs_diff_eq!(c.interp_at_date(date(2030, 1, 1)).unwrap(), 0.09);
        assert_abs_diff_eq!(c.interp_at_date(date(2016, 1, 1)).unwrap(), 0.07);
    }

    #[test]
    fn discount_factor_uses_zero_rate() {
        let c = curve(None);
        let d = date(2017, 9, 17);
        assert_abs_diff_eq!(c.get_df(d).unwrap(), (-0.08_f64).exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(c.get_df(c.anchor_date()).unwrap(), 1.0);
        assert!(matches!(c.get_df(date(2016, 9, 1)), Err(Error::InvalidRange(_))));
    }

    #[test]
    fn maximum_date_bounds_the_curve() {
        let c = curve(Some(date(2026, 9, 17)));
        assert_abs_diff_eq!(c.interp_at_date(date(2026, 9, 17)).unwrap(), 0.09);
        assert!(matches!(
            c.interp_at_date(date(2026, 9, 18)),
            Err(Error::InvalidRange(_))
        ));
        assert!(matches!(c.get_df(date(2027, 1, 1)), Err(Error::InvalidRange(_))));
    }

    #[test]
    fn rejects_bad_inputs() {
        let anchor = date(2016, 9, 17);
        let ccy = Currency::zar;
        assert!(DatesAndRates::new(ccy(), anchor, &[], &[], None).is_err());
        assert!(DatesAndRates::new(ccy(), anchor, &[anchor], &[0.1, 0.2], None).is_err());
        assert!(DatesAndRates::new(
            ccy(),
            anchor,
            &[date(2017, 1, 1), date(2017, 1, 1)],
            &[0.1, 0.2],
            None
        )
        .is_err());
        assert!(matches!(
            DatesAndRates::new(ccy(), anchor, &[date(2016, 1, 1)], &[0.1], None),
            Err(Error::InvalidRange(_))
        ));
        assert!(matches!(
            DatesAndRates::new(ccy(), anchor, &[date(2018, 1, 1)], &[0.1], Some(date(2017, 1, 1))),
            Err(Error::InvalidRange(_))
        ));
    }
}
