//! Interest rate with compounding and day-counting conventions.
//!
//! An `InterestRate` bundles a rate value with a `DayCounter` and a
//! `CompoundingConvention`.  It can compute compound factors, discount
//! factors and equivalent rates between dates.

use crate::date::Date;
use crate::day_counter::DayCounter;
use qsa_core::errors::Result;
use qsa_core::{CompoundingConvention, DiscountFactor, Rate, Real, Time};
use std::sync::Arc;

/// An interest rate with associated compounding and day-counting conventions.
#[derive(Debug, Clone)]
pub struct InterestRate {
    rate: Rate,
    dc: Arc<dyn DayCounter>,
    compounding: CompoundingConvention,
}

impl InterestRate {
    /// Create a new interest rate.
    ///
    /// # Arguments
    /// * `rate`: the annual rate as a decimal (e.g. 0.05 = 5%)
    /// * `dc`: day counter for year-fraction calculations
    /// * `compounding`: compounding convention
    pub fn new(rate: Rate, dc: Arc<dyn DayCounter>, compounding: CompoundingConvention) -> Self {
        Self {
            rate,
            dc,
            compounding,
        }
    }

    /// The rate value.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The day counter.
    pub fn day_counter(&self) -> &dyn DayCounter {
        &*self.dc
    }

    /// The compounding convention.
    pub fn compounding(&self) -> CompoundingConvention {
        self.compounding
    }

    /// Compound factor over `t` years.
    pub fn compound_factor_time(&self, t: Time) -> Real {
        self.compounding.compound_factor(self.rate, t)
    }

    /// Compound factor between two dates.
    pub fn compound_factor(&self, d1: Date, d2: Date) -> Real {
        self.compound_factor_time(self.dc.year_fraction(d1, d2))
    }

    /// Discount factor over `t` years.
    pub fn discount_factor_time(&self, t: Time) -> DiscountFactor {
        self.compounding.discount_factor(self.rate, t)
    }

    /// Discount factor between two dates.
    pub fn discount_factor(&self, d1: Date, d2: Date) -> DiscountFactor {
        self.discount_factor_time(self.dc.year_fraction(d1, d2))
    }

    /// The rate under `compounding` and `dc` that accrues the same amount as
    /// this one between `d1` and `d2`.
    ///
    /// # Errors
    /// Returns an error if `d1 == d2` under the target day count, since no
    /// rate can be implied over a zero period.
    pub fn equivalent_rate(
        &self,
        d1: Date,
        d2: Date,
        dc: Arc<dyn DayCounter>,
        compounding: CompoundingConvention,
    ) -> Result<InterestRate> {
        let factor = self.compound_factor(d1, d2);
        let t = dc.year_fraction(d1, d2);
        let rate = compounding.rate_from_factor(factor, t)?;
        Ok(InterestRate::new(rate, dc, compounding))
    }
}

impl std::fmt::Display for InterestRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.6}% {} {}",
            self.rate * 100.0,
            self.dc.name(),
            self.compounding
        )
    }
}
