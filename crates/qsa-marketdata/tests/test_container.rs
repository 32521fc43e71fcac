//! Integration tests for `MarketDataContainer`.

use qsa_core::Error;
use qsa_marketdata::{
    Currency, CurveDescription, DatesAndRates, DiscountingSource, DiscountingSourceDescription,
    FloatRateIndex, FloatingRateSource, FloatingRateSourceDescription, ForecastCurveFromDiscount,
    MarketDataContainer, SingleRate, SingleRateFixings,
};
use qsa_time::{Date, Tenor};
use std::sync::Arc;

fn anchor() -> Date {
    Date::from_ymd(2016, 9, 17).unwrap()
}

fn jibar3m() -> FloatRateIndex {
    FloatRateIndex::jibar(Tenor::from_months(3))
}

fn populated() -> MarketDataContainer {
    let discount: Arc<dyn DiscountingSource> =
        Arc::new(SingleRate::new(0.07, anchor(), Currency::zar()));
    let fixings: Arc<dyn FloatingRateSource> =
        Arc::new(SingleRateFixings::new(0.072, anchor(), jibar3m()));
    let forecast: Arc<dyn FloatingRateSource> = Arc::new(ForecastCurveFromDiscount::new(
        Arc::clone(&discount),
        jibar3m(),
        fixings,
    ));

    let mut c = MarketDataContainer::new();
    c.add(&DiscountingSourceDescription::new(&Currency::zar()), discount)
        .unwrap();
    c.add(&FloatingRateSourceDescription::new(&jibar3m()), forecast)
        .unwrap();
    c
}

#[test]
fn test_lookup_by_description() {
    let c = populated();
    assert_eq!(c.len(), 2);
    let zar = c
        .get(&DiscountingSourceDescription::new(&Currency::zar()))
        .unwrap();
    assert_eq!(zar.currency(), &Currency::zar());
    let jibar = c.get(&FloatingRateSourceDescription::new(&jibar3m())).unwrap();
    assert_eq!(jibar.floating_index(), &jibar3m());
    // Each source is registered under the name it reports.
    assert_eq!(zar.name(), "DiscountingSource.ZAR");
    assert_eq!(jibar.name(), "FloatingRateSource.ZAR:JIBAR:3M");
}

#[test]
fn test_index_name_is_case_insensitive() {
    let c = populated();
    let lower = FloatRateIndex::new(Currency::new("zar"), "jibar", Tenor::from_months(3));
    assert!(c.contains(&FloatingRateSourceDescription::new(&lower)));
}

#[test]
fn test_equal_indices_find_the_same_source() {
    let mut c = MarketDataContainer::new();
    let twelve_months = FloatRateIndex::jibar(Tenor::from_months(12));
    let one_year = FloatRateIndex::jibar(Tenor::from_years(1));
    let fixings: Arc<dyn FloatingRateSource> =
        Arc::new(SingleRateFixings::new(0.072, anchor(), twelve_months.clone()));
    c.add(&FloatingRateSourceDescription::new(&twelve_months), fixings)
        .unwrap();

    let again = FloatRateIndex::new(Currency::zar(), "Jibar", Tenor::from_months(12));
    assert_eq!(again, twelve_months);
    assert!(c.contains(&FloatingRateSourceDescription::new(&again)));

    // Written differently, so a different index and a different slot.
    assert_ne!(one_year, twelve_months);
    assert!(matches!(
        c.get(&FloatingRateSourceDescription::new(&one_year)),
        Err(Error::MissingMarketData(_))
    ));
}

#[test]
fn test_missing_and_duplicate() {
    let mut c = populated();
    let usd = DiscountingSourceDescription::new(&Currency::usd());
    assert!(matches!(c.get(&usd), Err(Error::MissingMarketData(_))));
    let jibar6m = FloatRateIndex::jibar(Tenor::from_months(6));
    assert!(matches!(
        c.get(&FloatingRateSourceDescription::new(&jibar6m)),
        Err(Error::MissingMarketData(_))
    ));

    let again: Arc<dyn DiscountingSource> =
        Arc::new(SingleRate::new(0.09, anchor(), Currency::zar()));
    assert!(matches!(
        c.add(&DiscountingSourceDescription::new(&Currency::zar()), again),
        Err(Error::DuplicateRegistration(_))
    ));
    assert_eq!(c.len(), 2);
}

#[test]
fn test_same_name_different_kind_is_missing() {
    let mut c = MarketDataContainer::new();
    let curve = DatesAndRates::new(
        Currency::zar(),
        anchor(),
        &[Date::from_ymd(2020, 1, 1).unwrap()],
        &[0.05],
        None,
    )
    .unwrap();
    let zar = DiscountingSourceDescription::new(&Currency::zar());
    c.add(&zar, Arc::new(curve) as Arc<dyn DiscountingSource>).unwrap();
    assert!(c.contains(&zar));
    assert!(!c.contains(&CurveDescription::new("ZAR")));
    assert!(matches!(
        c.get(&CurveDescription::new("DiscountingSource.ZAR")),
        Err(Error::MissingMarketData(_))
    ));
}

#[test]
fn test_read_only_sharing() {
    let c = Arc::new(populated());
    let d = Date::from_ymd(2019, 1, 1).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&c);
            std::thread::spawn(move || {
                c.get(&DiscountingSourceDescription::new(&Currency::zar()))
                    .unwrap()
                    .get_df(d)
                    .unwrap()
            })
        })
        .collect();
    let first = handles.into_iter().map(|h| h.join().unwrap()).collect::<Vec<_>>();
    assert!(first.windows(2).all(|w| w[0] == w[1]));
}
