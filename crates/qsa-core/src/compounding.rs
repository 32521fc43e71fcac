//! Compounding conventions.
//!
//! A compounding convention relates a rate `r` and a year fraction `t` to a
//! growth factor `C(r, t)`; the discount factor is `1 / C(r, t)`.  Every
//! convention is a stateless unit variant, so two handles to the same
//! convention always compare equal.

use crate::errors::{Error, Result};
use crate::{DiscountFactor, Rate, Real, Time};
use serde::{Deserialize, Serialize};

/// How interest is compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundingConvention {
    /// Simple interest: `1 + r·t`
    Simple,
    /// Discount-rate quotation: discount factor `1 − r·t`
    Discount,
    /// Compounded 365 times a year: `(1 + r/365)^(365·t)`
    Daily,
    /// Compounded monthly: `(1 + r/12)^(12·t)`
    Monthly,
    /// Compounded quarterly: `(1 + r/4)^(4·t)`
    Quarterly,
    /// Compounded semi-annually: `(1 + r/2)^(2·t)`
    SemiAnnual,
    /// Compounded annually: `(1 + r)^t`
    Annual,
    /// Continuously compounded: `e^(r·t)`
    Continuous,
}

impl CompoundingConvention {
    /// Every registered convention, in registry order.
    pub const ALL: [CompoundingConvention; 8] = [
        CompoundingConvention::Simple,
        CompoundingConvention::Discount,
        CompoundingConvention::Daily,
        CompoundingConvention::Monthly,
        CompoundingConvention::Quarterly,
        CompoundingConvention::SemiAnnual,
        CompoundingConvention::Annual,
        CompoundingConvention::Continuous,
    ];

    /// The registry identifier (e.g. `"Annual"`).
    pub fn name(&self) -> &'static str {
        match self {
            CompoundingConvention::Simple => "Simple",
            CompoundingConvention::Discount => "Discount",
            CompoundingConvention::Daily => "Daily",
            CompoundingConvention::Monthly => "Monthly",
            CompoundingConvention::Quarterly => "Quarterly",
            CompoundingConvention::SemiAnnual => "SemiAnnual",
            CompoundingConvention::Annual => "Annual",
            CompoundingConvention::Continuous => "Continuous",
        }
    }

    /// Look a convention up by its case-sensitive registry identifier.
    ///
    /// # Errors
    /// Returns [`Error::UnknownConvention`] if no convention has that name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::UnknownConvention(format!("compounding '{name}'")))
    }

    /// Compounding periods per year for the periodic conventions.
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            CompoundingConvention::Daily => Some(365),
            CompoundingConvention::Monthly => Some(12),
            CompoundingConvention::Quarterly => Some(4),
            CompoundingConvention::SemiAnnual => Some(2),
            CompoundingConvention::Annual => Some(1),
            _ => None,
        }
    }

    /// Growth factor of one unit invested at `rate` for `t` years.
    pub fn compound_factor(&self, rate: Rate, t: Time) -> Real {
        match self {
            CompoundingConvention::Simple => 1.0 + rate * t,
            CompoundingConvention::Discount => 1.0 / (1.0 - rate * t),
            CompoundingConvention::Continuous => (rate * t).exp(),
            periodic => {
                let n = periodic.periods_per_year().unwrap_or(1) as Real;
                (1.0 + rate / n).powf(n * t)
            }
        }
    }

    /// The rate that produces `factor` over `t` years.
    ///
    /// # Errors
    /// Fails if `t` is zero or `factor` is not strictly positive.
    pub fn rate_from_factor(&self, factor: Real, t: Time) -> Result<Rate> {
        crate::ensure!(t != 0.0, "cannot imply a rate over a zero year fraction");
        crate::ensure!(factor > 0.0, "compound factor must be positive, got {factor}");
        let rate = match self {
            CompoundingConvention::Simple => (factor - 1.0) / t,
            CompoundingConvention::Discount => (1.0 - 1.0 / factor) / t,
            CompoundingConvention::Continuous => factor.ln() / t,
            periodic => {
                let n = periodic.periods_per_year().unwrap_or(1) as Real;
                (factor.powf(1.0 / (n * t)) - 1.0) * n
            }
        };
        Ok(rate)
    }

    /// Discount factor for `rate` over `t` years.
    pub fn discount_factor(&self, rate: Rate, t: Time) -> DiscountFactor {
        match self {
            CompoundingConvention::Discount => 1.0 - rate * t,
            _ => 1.0 / self.compound_factor(rate, t),
        }
    }

    /// The rate implied by a discount factor `df` over `t` years.
    ///
    /// # Errors
    /// Fails if `t` is zero or `df` is not strictly positive.
    pub fn rate_from_df(&self, df: DiscountFactor, t: Time) -> Result<Rate> {
        crate::ensure!(df > 0.0, "discount factor must be positive, got {df}");
        self.rate_from_factor(1.0 / df, t)
    }
}

impl std::fmt::Display for CompoundingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CompoundingConvention {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
