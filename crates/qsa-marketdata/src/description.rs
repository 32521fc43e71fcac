//! Typed market-data descriptions.
//!
//! A [`MarketDataDescription<T>`] names a slot in a
//! [`MarketDataContainer`](crate::container::MarketDataContainer) and fixes
//! the type of source that slot holds.  The type tag and the name together
//! form the registry key.

use crate::currency::Currency;
use crate::curve::Curve;
use crate::discounting_source::DiscountingSource;
use crate::float_rate_index::FloatRateIndex;
use crate::floating_rate_source::FloatingRateSource;
use std::marker::PhantomData;
use std::sync::Arc;

// ── Type tags ────────────────────────────────────────────────────────────────

/// Kind of source a description refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarketDataKind {
    /// A [`DiscountingSource`].
    DiscountingSource,
    /// A [`FloatingRateSource`].
    FloatingRateSource,
    /// A generic [`Curve`].
    Curve,
}

impl std::fmt::Display for MarketDataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MarketDataKind::DiscountingSource => "DiscountingSource",
            MarketDataKind::FloatingRateSource => "FloatingRateSource",
            MarketDataKind::Curve => "Curve",
        };
        f.write_str(s)
    }
}

/// A stored source, tagged with its kind.
#[derive(Debug, Clone)]
pub enum MarketDataEntry {
    /// A discounting source.
    DiscountingSource(Arc<dyn DiscountingSource>),
    /// A floating rate source.
    FloatingRateSource(Arc<dyn FloatingRateSource>),
    /// A generic curve.
    Curve(Arc<dyn Curve>),
}

impl MarketDataEntry {
    /// Kind tag of the stored source.
    pub fn kind(&self) -> MarketDataKind {
        match self {
            MarketDataEntry::DiscountingSource(_) => MarketDataKind::DiscountingSource,
            MarketDataEntry::FloatingRateSource(_) => MarketDataKind::FloatingRateSource,
            MarketDataEntry::Curve(_) => MarketDataKind::Curve,
        }
    }
}

/// Source types that can be stored in a container.
///
/// Implemented for `dyn DiscountingSource`, `dyn FloatingRateSource` and
/// `dyn Curve`.
pub trait MarketDataType: Send + Sync + 'static {
    /// Tag of this source type.
    const KIND: MarketDataKind;

    /// Wrap a source for storage.
    fn wrap(source: Arc<Self>) -> MarketDataEntry;

    /// Recover a source of this type, or `None` if the entry holds another kind.
    fn unwrap(entry: &MarketDataEntry) -> Option<Arc<Self>>;
}

impl MarketDataType for dyn DiscountingSource {
    const KIND: MarketDataKind = MarketDataKind::DiscountingSource;

    fn wrap(source: Arc<Self>) -> MarketDataEntry {
        MarketDataEntry::DiscountingSource(source)
    }

    fn unwrap(entry: &MarketDataEntry) -> Option<Arc<Self>> {
        match entry {
            MarketDataEntry::DiscountingSource(s) => Some(Arc::clone(s)),
            _ => None,
        }
    }
}

impl MarketDataType for dyn FloatingRateSource {
    const KIND: MarketDataKind = MarketDataKind::FloatingRateSource;

    fn wrap(source: Arc<Self>) -> MarketDataEntry {
        MarketDataEntry::FloatingRateSource(source)
    }

    fn unwrap(entry: &MarketDataEntry) -> Option<Arc<Self>> {
        match entry {
            MarketDataEntry::FloatingRateSource(s) => Some(Arc::clone(s)),
            _ => None,
        }
    }
}

impl MarketDataType for dyn Curve {
    const KIND: MarketDataKind = MarketDataKind::Curve;

    fn wrap(source: Arc<Self>) -> MarketDataEntry {
        MarketDataEntry::Curve(source)
    }

    fn unwrap(entry: &MarketDataEntry) -> Option<Arc<Self>> {
        match entry {
            MarketDataEntry::Curve(s) => Some(Arc::clone(s)),
            _ => None,
        }
    }
}

// ── Descriptions ─────────────────────────────────────────────────────────────

/// A named slot for a source of type `T`.
pub struct MarketDataDescription<T: ?Sized> {
    name: String,
    _marker: PhantomData<fn() -> Arc<T>>,
}

/// Description of a [`DiscountingSource`].
pub type DiscountingSourceDescription = MarketDataDescription<dyn DiscountingSource>;

/// Description of a [`FloatingRateSource`].
pub type FloatingRateSourceDescription = MarketDataDescription<dyn FloatingRateSource>;

/// Description of a generic [`Curve`].
pub type CurveDescription = MarketDataDescription<dyn Curve>;

impl<T: ?Sized> MarketDataDescription<T> {
    fn from_name(name: String) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Registry name of the slot.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: MarketDataType + ?Sized> MarketDataDescription<T> {
    /// Kind tag of the slot.
    pub fn kind(&self) -> MarketDataKind {
        T::KIND
    }
}

impl MarketDataDescription<dyn DiscountingSource> {
    /// The single discount curve of `currency`: `DiscountingSource.<CCY>`.
    pub fn new(currency: &Currency) -> Self {
        Self::from_name(format!("DiscountingSource.{currency}"))
    }

    /// A discount curve of `currency` projected off an ibor index:
    /// `DiscountingSource.<CCY>.<index>`.
    pub fn with_ibor_index(currency: &Currency, index: &FloatRateIndex) -> Self {
        Self::from_name(format!("DiscountingSource.{currency}.{index}"))
    }
}

impl MarketDataDescription<dyn FloatingRateSource> {
    /// The forecasting source of `index`: `FloatingRateSource.<index>`.
    pub fn new(index: &FloatRateIndex) -> Self {
        Self::from_name(format!("FloatingRateSource.{index}"))
    }
}

impl MarketDataDescription<dyn Curve> {
    /// A free-form curve: `Curve.<name>`.
    pub fn new(name: impl std::fmt::Display) -> Self {
        Self::from_name(format!("Curve.{name}"))
    }
}

impl<T: ?Sized> Clone for MarketDataDescription<T> {
    fn clone(&self) -> Self {
        Self::from_name(self.name.clone())
    }
}

impl<T: ?Sized> PartialEq for MarketDataDescription<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: ?Sized> Eq for MarketDataDescription<T> {}

impl<T: ?Sized> std::hash::Hash for MarketDataDescription<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<T: ?Sized> std::fmt::Debug for MarketDataDescription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MarketDataDescription").field(&self.name).finish()
    }
}

impl<T: ?Sized> std::fmt::Display for MarketDataDescription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsa_time::Tenor;

    #[test]
    fn names() {
        let jibar = FloatRateIndex::jibar(Tenor::from_months(3));
        assert_eq!(
            DiscountingSourceDescription::new(&Currency::zar()).name(),
            "DiscountingSource.ZAR"
        );
        assert_eq!(
            DiscountingSourceDescription::with_ibor_index(&Currency::zar(), &jibar).to_string(),
            "DiscountingSource.ZAR.ZAR:JIBAR:3M"
        );
        assert_eq!(
            FloatingRateSourceDescription::new(&jibar).name(),
            "FloatingRateSource.ZAR:JIBAR:3M"
        );
        assert_eq!(CurveDescription::new("HazardZAR").name(), "Curve.HazardZAR");
    }

    #[test]
    fn kinds() {
        let jibar = FloatRateIndex::jibar(Tenor::from_months(3));
        assert_eq!(
            DiscountingSourceDescription::new(&Currency::zar()).kind(),
            MarketDataKind::DiscountingSource
        );
        assert_eq!(
            FloatingRateSourceDescription::new(&jibar).kind(),
            MarketDataKind::FloatingRateSource
        );
        assert_eq!(CurveDescription::new("x").kind(), MarketDataKind::Curve);
    }
}
