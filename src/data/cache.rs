//! Process-local memoization for loader results.
//!
//! Each loader owns exactly one cache slot (there is a single logical query
//! per loader, keyed on nothing). The slot stores the *outcome* of the load,
//! error included: a failed load stays failed until `invalidate` is called,
//! matching the reload-on-demand model of the dashboard.
//!
//! Population is single-flight: the mutex is held across the fill closure,
//! so concurrent cold callers block and then observe the one result instead
//! of issuing duplicate remote calls.

use std::sync::Mutex;

use crate::error::AppError;

pub struct CacheSlot<T> {
    slot: Mutex<Option<Result<T, AppError>>>,
}

impl<T: Clone> CacheSlot<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached outcome, filling it with `load` on first use.
    pub fn get_or_load(
        &self,
        load: impl FnOnce() -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut slot = self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if slot.is_none() {
            *slot = Some(load());
        }
        slot.as_ref()
            .cloned()
            .unwrap_or_else(|| Err(AppError::unavailable("cache slot empty after fill")))
    }

    /// Drop the cached outcome; the next `get_or_load` re-fetches.
    pub fn invalidate(&self) {
        let mut slot = self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = None;
    }
}

impl<T: Clone> Default for CacheSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
