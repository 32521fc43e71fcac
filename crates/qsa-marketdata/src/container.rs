//! `MarketDataContainer`: the registry of market data a valuation reads.
//!
//! Sources are stored under a `(kind, name)` key taken from a typed
//! [`MarketDataDescription`].  Register everything during setup, then share
//! the container read-only; `get` takes `&self` and the stored sources are
//! `Send + Sync`.

use crate::description::{MarketDataDescription, MarketDataEntry, MarketDataKind, MarketDataType};
use qsa_core::errors::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// A typed registry of market-data sources.
///
/// Registering a second source under an existing key is rejected with
/// [`Error::DuplicateRegistration`]; the first registration stays in place.
#[derive(Debug, Clone, Default)]
pub struct MarketDataContainer {
    sources: HashMap<(MarketDataKind, String), MarketDataEntry>,
}

impl MarketDataContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `source` under `description`.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateRegistration`] if a source of the same kind
    /// is already registered under the same name.
    ///
    /// ```
    /// use qsa_marketdata::{Currency, DiscountingSource, DiscountingSourceDescription,
    ///     MarketDataContainer, SingleRate};
    /// use qsa_time::Date;
    /// use std::sync::Arc;
    ///
    /// let anchor = Date::from_ymd(2016, 9, 17).unwrap();
    /// let desc = DiscountingSourceDescription::new(&Currency::zar());
    /// let mut container = MarketDataContainer::new();
    /// let curve: Arc<dyn DiscountingSource> = Arc::new(SingleRate::new(0.07, anchor, Currency::zar()));
    /// container.add(&desc, curve).unwrap();
    /// assert_eq!(container.get(&desc).unwrap().get_df(anchor).unwrap(), 1.0);
    /// ```
    pub fn add<T: MarketDataType + ?Sized>(
        &mut self,
        description: &MarketDataDescription<T>,
        source: Arc<T>,
    ) -> Result<()> {
        let key = (T::KIND, description.name().to_string());
        if self.sources.contains_key(&key) {
            warn!(kind = %T::KIND, name = description.name(), "duplicate market data registration");
            return Err(Error::DuplicateRegistration(format!(
                "{} '{}'",
                T::KIND,
                description.name()
            )));
        }
        debug!(kind = %T::KIND, name = description.name(), "registered market data");
        self.sources.insert(key, T::wrap(source));
        Ok(())
    }

    /// The source registered under `description`.
    ///
    /// # Errors
    /// Returns [`Error::MissingMarketData`] if nothing of that kind is
    /// registered under that name.
    pub fn get<T: MarketDataType + ?Sized>(
        &self,
        description: &MarketDataDescription<T>,
    ) -> Result<Arc<T>> {
        self.sources
            .get(&(T::KIND, description.name().to_string()))
            .and_then(T::unwrap)
            .ok_or_else(|| {
                warn!(kind = %T::KIND, name = description.name(), "missing market data");
                Error::MissingMarketData(format!("{} '{}'", T::KIND, description.name()))
            })
    }

    /// `true` if a source is registered under `description`.
    pub fn contains<T: MarketDataType + ?Sized>(&self, description: &MarketDataDescription<T>) -> bool {
        self.sources
            .contains_key(&(T::KIND, description.name().to_string()))
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Registered `(kind, name)` keys, sorted.
    pub fn names(&self) -> Vec<(MarketDataKind, &str)> {
        let mut keys: Vec<_> = self
            .sources
            .keys()
            .map(|(kind, name)| (*kind, name.as_str()))
            .collect();
        keys.sort_unstable();
        keys
    }
}
