//! `FloatRateIndex`: a floating rate index such as 3 month JIBAR.

use crate::currency::Currency;
use qsa_time::Tenor;
use serde::{Deserialize, Serialize};

/// A floating rate index: currency, name and tenor.
///
/// Displays as `CCY:NAME:TENOR` with the name upper-cased, e.g.
/// `ZAR:JIBAR:3M`.  Two indices are equal when they display the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatRateIndex {
    currency: Currency,
    name: String,
    tenor: Tenor,
}

impl FloatRateIndex {
    /// Create an index.
    pub fn new(currency: Currency, name: impl Into<String>, tenor: Tenor) -> Self {
        Self {
            currency,
            name: name.into(),
            tenor,
        }
    }

    /// JIBAR in ZAR.
    pub fn jibar(tenor: Tenor) -> Self {
        Self::new(Currency::zar(), "Jibar", tenor)
    }

    /// LIBOR in USD.
    pub fn libor(tenor: Tenor) -> Self {
        Self::new(Currency::usd(), "Libor", tenor)
    }

    /// EURIBOR in EUR.
    pub fn euribor(tenor: Tenor) -> Self {
        Self::new(Currency::eur(), "Euribor", tenor)
    }

    /// Currency of the index.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Index name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tenor of the underlying deposit.
    pub fn tenor(&self) -> &Tenor {
        &self.tenor
    }

}

impl PartialEq for FloatRateIndex {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for FloatRateIndex {}

impl std::hash::Hash for FloatRateIndex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl std::fmt::Display for FloatRateIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.currency,
            self.name.to_uppercase(),
            self.tenor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let jibar = FloatRateIndex::jibar(Tenor::from_months(3));
        assert_eq!(jibar.to_string(), "ZAR:JIBAR:3M");
        assert_eq!(
            FloatRateIndex::libor(Tenor::from_months(6)).to_string(),
            "USD:LIBOR:6M"
        );
    }

    #[test]
    fn equality_ignores_name_case() {
        let a = FloatRateIndex::new(Currency::zar(), "jibar", Tenor::from_months(3));
        let b = FloatRateIndex::jibar(Tenor::from_months(3));
        assert_eq!(a, b);
        assert_ne!(b, FloatRateIndex::jibar(Tenor::from_months(6)));
    }

    #[test]
    fn tenor_is_compared_as_written() {
        let twelve_months = FloatRateIndex::jibar(Tenor::from_months(12));
        let one_year = FloatRateIndex::jibar(Tenor::from_years(1));
        assert_ne!(twelve_months.to_string(), one_year.to_string());
        assert_ne!(twelve_months, one_year);
    }
}
