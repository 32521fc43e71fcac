//! Error types for quantsa.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  The
//! [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros cover the
//! common guard-clause cases.

use thiserror::Error;

/// The top-level error type used throughout quantsa.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date string that is not strict `yyyy-MM-dd`, or that names a day
    /// which does not exist.
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    /// An impossible calendar date, or one outside the representable range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A tenor string that does not follow the `{N}Y{N}M{N}W{N}D` grammar.
    #[error("invalid tenor: {0}")]
    InvalidTenor(String),

    /// A convention name with no registered convention.
    #[error("unknown convention: {0}")]
    UnknownConvention(String),

    /// A calendar name the holiday source cannot resolve.
    #[error("unknown calendar: {0}")]
    UnknownCalendar(String),

    /// No market-data source is registered under the requested description.
    #[error("missing market data: {0}")]
    MissingMarketData(String),

    /// A market-data source is already registered under this description.
    #[error("duplicate registration: {0}")]
    DuplicateRegistration(String),

    /// A date or value outside the range an object is defined on.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// No result stored under the requested key.
    #[error("missing result: {0}")]
    MissingResult(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout quantsa.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use qsa_core::{ensure, errors::Error};
/// fn positive(x: f64) -> qsa_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use qsa_core::{fail, errors::Error};
/// fn always_err() -> qsa_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
