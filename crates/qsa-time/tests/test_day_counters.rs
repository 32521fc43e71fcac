//! Integration tests for the `DayCounter` family.
//!
//! Reference values come from published ISDA examples and the 2008
//! South African market calendar (Good Friday 2008-03-21).

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use qsa_time::day_counter::{ACTUAL_360, ACTUAL_365_FIXED, ACT_ACT_ISDA, THIRTY_360_EURO};
use qsa_time::{ActActIsda, Business252, Calendar, Date, DayCounter};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Reference scenarios ─────────────────────────────────────────────────────

#[test]
fn test_actual_365_fixed() {
    let yf = ACTUAL_365_FIXED.year_fraction(date(2003, 11, 1), date(2004, 5, 1));
    assert_abs_diff_eq!(yf, 182.0 / 365.0, epsilon = 1e-9);
}

#[test]
fn test_actual_360() {
    let yf = ACTUAL_360.year_fraction(date(2003, 11, 1), date(2004, 5, 1));
    assert_abs_diff_eq!(yf, 182.0 / 360.0, epsilon = 1e-9);
}

#[test]
fn test_act_act_isda() {
    let yf = ACT_ACT_ISDA.year_fraction(date(2003, 11, 1), date(2004, 5, 1));
    assert_abs_diff_eq!(yf, 61.0 / 365.0 + 121.0 / 366.0, epsilon = 1e-9);
    assert_abs_diff_eq!(yf, 0.497724380567, epsilon = 1e-9);
}

#[test]
fn test_act_act_isda_reference_periods() {
    let dc = ActActIsda;
    let cases = [
        (date(1999, 2, 1), date(1999, 7, 1), 0.410958904110),
        (date(1999, 7, 1), date(2000, 7, 1), 1.001377348600),
        (date(2002, 8, 15), date(2003, 7, 15), 0.915068493151),
        (date(2003, 7, 15), date(2004, 1, 15), 0.504004790778),
        (date(1999, 7, 30), date(2000, 1, 30), 0.503892506924),
        (date(2000, 1, 30), date(2000, 6, 30), 0.415300546448),
    ];
    for (d1, d2, expected) in cases {
        assert_abs_diff_eq!(dc.year_fraction(d1, d2), expected, epsilon = 1e-9);
    }
}

#[test]
fn test_thirty_360_euro() {
    let yf = THIRTY_360_EURO.year_fraction(date(2008, 2, 28), date(2008, 3, 31));
    assert_abs_diff_eq!(yf, 32.0 / 360.0, epsilon = 1e-9);
}

#[test]
fn test_business_252() {
    let d1 = date(2008, 2, 28);
    let d2 = date(2008, 3, 31);

    let weekends = Business252::new(Calendar::weekends_only());
    assert_abs_diff_eq!(weekends.year_fraction(d1, d2), 22.0 / 252.0, epsilon = 1e-9);

    let with_holiday = Business252::new(std::sync::Arc::new(Calendar::new(
        "ZAR",
        [date(2008, 3, 21)],
    )));
    assert_abs_diff_eq!(with_holiday.year_fraction(d1, d2), 21.0 / 252.0, epsilon = 1e-9);
    assert_eq!(with_holiday.day_count(d1, d2), 21);
}

#[test]
fn test_zero_length_periods() {
    let d = date(2016, 2, 29);
    let b252 = Business252::new(Calendar::weekends_only());
    let counters: [&dyn DayCounter; 5] =
        [&ACTUAL_365_FIXED, &ACTUAL_360, &ACT_ACT_ISDA, &THIRTY_360_EURO, &b252];
    for dc in counters {
        assert_abs_diff_eq!(dc.year_fraction(d, d), 0.0, epsilon = 1e-12);
    }
}

// ─── Properties ──────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial()).prop_map(|s| Date::from_serial(s).unwrap())
}

fn recent_date() -> impl Strategy<Value = Date> {
    (36526i32..=54789).prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #[test]
    fn actual_counters_are_additive(a in any_date(), b in any_date(), c in any_date()) {
        let mut ds = [a, b, c];
        ds.sort();
        let [d1, d2, d3] = ds;
        for dc in [&ACTUAL_365_FIXED as &dyn DayCounter, &ACTUAL_360] {
            let whole = dc.year_fraction(d1, d3);
            let parts = dc.year_fraction(d1, d2) + dc.year_fraction(d2, d3);
            prop_assert!((whole - parts).abs() < 1e-9);
        }
    }

    #[test]
    fn counters_are_antisymmetric(d1 in recent_date(), d2 in recent_date()) {
        let b252 = Business252::new(Calendar::weekends_only());
        let counters: [&dyn DayCounter; 5] =
            [&ACTUAL_365_FIXED, &ACTUAL_360, &ACT_ACT_ISDA, &THIRTY_360_EURO, &b252];
        for dc in counters {
            prop_assert!((dc.year_fraction(d1, d2) + dc.year_fraction(d2, d1)).abs() < 1e-12);
        }
    }

    #[test]
    fn act_act_isda_within_a_year_matches_actual(d1 in recent_date(), n in 0i32..365) {
        let d2 = d1.add_days(n).unwrap();
        prop_assume!(d1.year() == d2.year());
        let dib = if d1.is_leap_year() { 366.0 } else { 365.0 };
        prop_assert!((ACT_ACT_ISDA.year_fraction(d1, d2) - f64::from(n) / dib).abs() < 1e-12);
    }
}
