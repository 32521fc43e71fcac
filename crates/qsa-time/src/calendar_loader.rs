//! Calendar lookup by name.
//!
//! Holiday data lives outside the library; a [`CalendarLoader`] is the
//! injected collaborator that turns a calendar name into a [`Calendar`].

use crate::calendar::{Calendar, CalendarDefinition, WEEKENDS_ONLY};
use qsa_core::errors::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves calendar names to shared calendars.
pub trait CalendarLoader: Send + Sync {
    /// Load the calendar called `name`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownCalendar`] if the loader has no such calendar.
    fn load_calendar(&self, name: &str) -> Result<Arc<Calendar>>;
}

/// A [`CalendarLoader`] over a fixed set of calendars held in memory.
///
/// `"WeekendsOnly"` always resolves, to [`Calendar::weekends_only`], unless a
/// calendar of that name was registered explicitly.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalendarLoader {
    calendars: HashMap<String, Arc<Calendar>>,
}

impl InMemoryCalendarLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a loader from serialised calendar definitions.  Later
    /// definitions replace earlier ones with the same name.
    pub fn from_definitions(defs: impl IntoIterator<Item = CalendarDefinition>) -> Self {
        let mut loader = Self::new();
        for def in defs {
            loader.insert(Calendar::from(def));
        }
        loader
    }

    /// Register `calendar` under its own name, returning the calendar it
    /// replaces, if any.
    pub fn insert(&mut self, calendar: Calendar) -> Option<Arc<Calendar>> {
        debug!(
            name = calendar.name(),
            holidays = calendar.holidays().count(),
            "registering calendar"
        );
        self.calendars
            .insert(calendar.name().to_string(), Arc::new(calendar))
    }

    /// Names of the registered calendars, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.calendars.keys().map(String::as_str)
    }
}

impl CalendarLoader for InMemoryCalendarLoader {
    fn load_calendar(&self, name: &str) -> Result<Arc<Calendar>> {
        if let Some(cal) = self.calendars.get(name) {
            debug!(name, "loaded calendar");
            return Ok(Arc::clone(cal));
        }
        if name == WEEKENDS_ONLY {
            return Ok(Calendar::weekends_only());
        }
        warn!(name, "unknown calendar");
        Err(Error::UnknownCalendar(name.to_string()))
    }
}
