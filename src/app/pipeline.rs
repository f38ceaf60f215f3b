//! Shared loading pipeline used by every front-end command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! configure sources -> load national series -> load state panel
//!
//! The commands then focus on filtering and printing. Loader failures stay
//! inside `DashboardData` as values; the presentation code branches on them
//! explicitly instead of catching anything.

use crate::config::Sources;
use crate::data::{NationalSeriesLoader, StatePanelLoader};
use crate::domain::{NationalTable, StatePanel};
use crate::error::AppError;

/// Outcome of both loads. An `Err` side means "data unavailable"; an empty
/// `Ok` table means the source really had no matching rows.
pub struct DashboardData {
    pub national: Result<NationalTable, AppError>,
    pub states: Result<StatePanel, AppError>,
}

/// Owns the two loaders and therefore the two process-wide cache entries.
pub struct Pipeline {
    national: NationalSeriesLoader,
    states: StatePanelLoader,
}

impl Pipeline {
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Sources::from_env())
    }

    pub fn new(sources: Sources) -> Result<Self, AppError> {
        Ok(Self {
            national: NationalSeriesLoader::new(sources.clone())?,
            states: StatePanelLoader::new(sources)?,
        })
    }

    /// Load both datasets, memoized. Neither failure aborts the other.
    pub fn load_all(&self) -> DashboardData {
        DashboardData {
            national: self.national.load(),
            states: self.states.load(),
        }
    }

    pub fn national(&self) -> Result<NationalTable, AppError> {
        self.national.load()
    }

    pub fn states(&self) -> Result<StatePanel, AppError> {
        self.states.load()
    }

    /// Drop both cache entries; the next load re-fetches.
    pub fn invalidate(&self) {
        self.national.invalidate();
        self.states.invalidate();
    }
}
