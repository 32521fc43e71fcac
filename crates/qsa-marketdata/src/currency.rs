//! `Currency`: an upper-cased currency code.

use serde::{Deserialize, Serialize};

/// A currency identified by its code (e.g. `"ZAR"`).
///
/// Codes are upper-cased on construction, so `Currency::new("zar")` equals
/// `Currency::new("ZAR")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Currency {
    code: String,
}

impl Currency {
    /// Create a currency from its code.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self {
            code: code.as_ref().to_uppercase(),
        }
    }

    /// South African rand.
    pub fn zar() -> Self {
        Self::new("ZAR")
    }

    /// US dollar.
    pub fn usd() -> Self {
        Self::new("USD")
    }

    /// Euro.
    pub fn eur() -> Self {
        Self::new("EUR")
    }

    /// The upper-cased code.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency::new(code)
    }
}

impl From<Currency> for String {
    fn from(ccy: Currency) -> String {
        ccy.code
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_upper_cased() {
        assert_eq!(Currency::new("zar"), Currency::zar());
        assert_eq!(Currency::new("usd").to_string(), "USD");
        let ccy: Currency = serde_json::from_str("\"eur\"").unwrap();
        assert_eq!(ccy, Currency::eur());
        assert_eq!(serde_json::to_string(&ccy).unwrap(), "\"EUR\"");
    }
}
