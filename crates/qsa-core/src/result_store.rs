//! Scalar result storage.
//!
//! Valuation code writes named results into a store; callers read them back
//! by key.  A lookup miss is an error, never a default value.

use crate::errors::{Error, Result};
use crate::Real;
use std::collections::HashMap;

/// Read access to named scalar results.
pub trait ResultStore: std::fmt::Debug + Send + Sync {
    /// The scalar stored under `key`.
    ///
    /// # Errors
    /// Returns [`Error::MissingResult`] if nothing is stored under `key`.
    fn get_scalar(&self, key: &str) -> Result<Real>;

    /// Whether a scalar is stored under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get_scalar(key).is_ok()
    }
}

/// A `HashMap`-backed [`ResultStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultStore {
    scalars: HashMap<String, Real>,
}

impl InMemoryResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn add_scalar(&mut self, key: impl Into<String>, value: Real) {
        self.scalars.insert(key.into(), value);
    }

    /// All stored keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.scalars.keys().map(String::as_str)
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }
}

impl ResultStore for InMemoryResultStore {
    fn get_scalar(&self, key: &str) -> Result<Real> {
        self.scalars
            .get(key)
            .copied()
            .ok_or_else(|| Error::MissingResult(key.to_string()))
    }
}
