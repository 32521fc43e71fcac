//! Integration tests for discounting and forecasting sources.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use qsa_core::Error;
use qsa_marketdata::{
    Currency, Curve, DatesAndRates, DiscountingSource, FloatRateIndex, FloatingRateSource,
    ForecastCurve, ForecastCurveFromDiscount, MarketDataSource, ShiftedDiscountSource, SingleRate,
    SingleRateFixings,
};
use qsa_time::{Date, Tenor};
use std::sync::Arc;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn anchor() -> Date {
    date(2016, 9, 17)
}

fn zar_zero_curve() -> DatesAndRates {
    DatesAndRates::new(
        Currency::zar(),
        anchor(),
        &[date(2017, 9, 17), date(2021, 9, 17), date(2026, 9, 17)],
        &[0.071, 0.078, 0.085],
        None,
    )
    .unwrap()
}

// ─── Discount curves ─────────────────────────────────────────────────────────

#[test]
fn test_vectorised_lookups_keep_input_order() {
    let curve = zar_zero_curve();
    let dates = [date(2026, 9, 17), anchor(), date(2017, 9, 17)];
    let dfs = curve.get_dfs(&dates).unwrap();
    assert_eq!(dfs.len(), 3);
    for (d, df) in dates.iter().zip(&dfs) {
        assert_abs_diff_eq!(*df, curve.get_df(*d).unwrap(), epsilon = 1e-15);
    }
    let rates = curve.interp_at_dates(&dates).unwrap();
    assert_eq!(rates, vec![0.085, 0.071, 0.071]);
}

#[test]
fn test_get_dfs_fails_on_any_date_before_anchor() {
    let curve = zar_zero_curve();
    assert!(matches!(
        curve.get_dfs(&[date(2017, 1, 1), date(2016, 1, 1)]),
        Err(Error::InvalidRange(_))
    ));
}

#[test]
fn test_single_rate_matches_one_pillar_curve() {
    let flat = SingleRate::new(0.07, anchor(), Currency::zar());
    let pillars =
        DatesAndRates::new(Currency::zar(), anchor(), &[date(2020, 1, 1)], &[0.07], None).unwrap();
    for d in [anchor(), date(2018, 6, 30), date(2045, 1, 1)] {
        assert_abs_diff_eq!(flat.get_df(d).unwrap(), pillars.get_df(d).unwrap(), epsilon = 1e-15);
    }
    assert_eq!(flat.name(), pillars.name());
}

#[test]
fn test_shifted_curve_over_pillars() {
    let base: Arc<dyn DiscountingSource> = Arc::new(zar_zero_curve());
    let down = ShiftedDiscountSource::new(Arc::clone(&base), 0.0025);
    let d = date(2021, 9, 17);
    let t = f64::from(d - anchor()) / 365.0;
    assert_abs_diff_eq!(
        down.get_df(d).unwrap(),
        (-(0.078 - 0.0025) * t).exp(),
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(down.get_df(anchor()).unwrap(), 1.0, epsilon = 1e-15);
}

// ─── Forecasting ─────────────────────────────────────────────────────────────

#[test]
fn test_forecast_from_discount_over_pillars() {
    let index = FloatRateIndex::jibar(Tenor::from_months(3));
    let discount: Arc<dyn DiscountingSource> = Arc::new(zar_zero_curve());
    let fixings: Arc<dyn FloatingRateSource> =
        Arc::new(SingleRateFixings::new(0.07, anchor(), index.clone()));
    let forecaster = ForecastCurveFromDiscount::new(Arc::clone(&discount), index, fixings);

    let d = date(2019, 2, 28);
    let later = date(2019, 5, 28);
    let dt = f64::from(later - d) / 365.0;
    let expected = (discount.get_df(d).unwrap() / discount.get_df(later).unwrap() - 1.0) / dt;
    assert_abs_diff_eq!(forecaster.forward_rate(d).unwrap(), expected, epsilon = 1e-12);
    assert_eq!(forecaster.forward_rate(anchor()).unwrap(), 0.07);
}

#[test]
fn test_forecast_curve_is_a_curve() {
    let index = FloatRateIndex::libor(Tenor::from_months(6));
    let fc = ForecastCurve::new(
        anchor(),
        index,
        &[anchor(), date(2018, 9, 17)],
        &[0.01, 0.02],
    )
    .unwrap();
    let curve: &dyn Curve = &fc;
    assert_eq!(curve.name(), "FloatingRateSource.USD:LIBOR:6M");
    assert_eq!(curve.interp_at_date(date(2030, 1, 1)).unwrap(), 0.02);
    assert_eq!(fc.anchor_date(), anchor());
}

#[test]
fn test_sources_are_shareable_across_threads() {
    let curve: Arc<dyn DiscountingSource> = Arc::new(zar_zero_curve());
    let d = date(2030, 3, 1);
    let expected = curve.get_df(d).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&curve);
            std::thread::spawn(move || c.get_df(d).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_discount_factors_decrease_for_positive_rates(a in 0i32..15_000, b in 0i32..15_000) {
        let curve = zar_zero_curve();
        let (lo, hi) = (a.min(b), a.max(b));
        let d1 = Date::from_serial(anchor().serial() + lo).unwrap();
        let d2 = Date::from_serial(anchor().serial() + hi).unwrap();
        prop_assert!(curve.get_df(d2).unwrap() <= curve.get_df(d1).unwrap() + 1e-15);
    }

    #[test]
    fn prop_interpolated_rate_within_pillar_bounds(offset in -1_000i32..20_000) {
        let curve = zar_zero_curve();
        let d = Date::from_serial(anchor().serial() + offset).unwrap();
        let r = curve.interp_at_date(d).unwrap();
        prop_assert!((0.071 - 1e-12..=0.085 + 1e-12).contains(&r));
    }
}
