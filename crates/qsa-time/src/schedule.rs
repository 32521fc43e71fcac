//! `Schedule`: unadjusted accrual periods rolled forward by a fixed tenor.
//!
//! No holiday adjustment and no stub periods: each date is the previous one
//! advanced by the period tenor, and accrual fractions are Actual/365.

use crate::date::Date;
use crate::day_counter::{DayCounter, ACTUAL_365_FIXED};
use crate::tenor::Tenor;
use qsa_core::errors::Result;
use qsa_core::Time;

/// One accrual period per entry: reset (accrual start), payment (accrual end)
/// and the Actual/365 fraction between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    reset_dates: Vec<Date>,
    payment_dates: Vec<Date>,
    accrual_fractions: Vec<Time>,
}

impl Schedule {
    /// Accrual start dates.
    pub fn reset_dates(&self) -> &[Date] {
        &self.reset_dates
    }

    /// Accrual end (payment) dates.
    pub fn payment_dates(&self) -> &[Date] {
        &self.payment_dates
    }

    /// Actual/365 accrual fractions.
    pub fn accrual_fractions(&self) -> &[Time] {
        &self.accrual_fractions
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.payment_dates.len()
    }

    /// Return `true` if the schedule has no periods.
    pub fn is_empty(&self) -> bool {
        self.payment_dates.is_empty()
    }

    /// First accrual start date.
    pub fn start_date(&self) -> Option<Date> {
        self.reset_dates.first().copied()
    }

    /// Last payment date.
    pub fn end_date(&self) -> Option<Date> {
        self.payment_dates.last().copied()
    }

    fn push(&mut self, reset: Date, payment: Date) {
        self.reset_dates.push(reset);
        self.payment_dates.push(payment);
        self.accrual_fractions
            .push(ACTUAL_365_FIXED.year_fraction(reset, payment));
    }
}

/// `count` payment dates `period` apart, the first one being
/// `start + period`.
///
/// Each date is the previous date plus `period`, so month-end clamping
/// carries forward (Jan 31 → Feb 28 → Mar 28).
///
/// # Errors
/// Returns an error if `period` is zero or a date leaves the valid range.
pub fn dates_no_holidays(period: &Tenor, start: Date, count: usize) -> Result<Schedule> {
    qsa_core::ensure!(!period.is_zero(), "period tenor must be non-zero");
    let mut schedule = Schedule::default();
    let mut reset = start;
    for _ in 0..count {
        let payment = reset.add_tenor(period)?;
        schedule.push(reset, payment);
        reset = payment;
    }
    Ok(schedule)
}

/// Periods of length `period` from `start`, rolling while the payment date
/// is on or before `start + end_tenor`.
///
/// # Errors
/// Returns an error if `period` is zero or a date leaves the valid range.
pub fn rolled_dates_no_holidays(start: Date, end_tenor: &Tenor, period: &Tenor) -> Result<Schedule> {
    qsa_core::ensure!(!period.is_zero(), "period tenor must be non-zero");
    let end = start.add_tenor(end_tenor)?;
    let mut schedule = Schedule::default();
    let mut reset = start;
    // `end` is in range, so a step past the last date is also past `end`.
    while let Ok(payment) = reset.add_tenor(period) {
        if payment > end {
            break;
        }
        schedule.push(reset, payment);
        reset = payment;
    }
    Ok(schedule)
}
