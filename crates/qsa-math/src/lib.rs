//! # qsa-math
//!
//! One-dimensional interpolation used by the market-data curves.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// 1D interpolation schemes.
pub mod interpolations;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use interpolations::{Extrapolation, Interpolation1D, LinearInterpolation};
