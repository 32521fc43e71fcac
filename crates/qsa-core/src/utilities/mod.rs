//! Miscellaneous utilities.

/// String parsers for dates and tenors.
pub mod data_parsers;
