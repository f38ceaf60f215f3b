//! National time-series loader.
//!
//! Produces the single chronologically sorted national table for Brazil by
//! merging the long-format income extract (`income.rs`) with the Gini and
//! unemployment series from the statistical API (`worldbank.rs`).
//!
//! The income series is authoritative: the final table has exactly the
//! years income has, each once; indicator values left-join onto them and
//! are `None` where the indicator has no observation for that year.

use std::collections::{BTreeMap, HashMap};

use crate::config::Sources;
use crate::data::cache::CacheSlot;
use crate::data::fetch_text;
use crate::data::income::parse_income_csv;
use crate::data::worldbank::IndicatorClient;
use crate::domain::{IndicatorObservation, NationalRecord, NationalTable};
use crate::error::AppError;

pub struct NationalSeriesLoader {
    sources: Sources,
    client: IndicatorClient,
    cache: CacheSlot<NationalTable>,
}

impl NationalSeriesLoader {
    pub fn new(sources: Sources) -> Result<Self, AppError> {
        Ok(Self {
            sources,
            client: IndicatorClient::new()?,
            cache: CacheSlot::new(),
        })
    }

    /// Load the national table, memoized for the process lifetime.
    ///
    /// A warm cache returns the same logical table with zero network calls;
    /// a failed load is also memoized until `invalidate`.
    pub fn load(&self) -> Result<NationalTable, AppError> {
        self.cache.get_or_load(|| self.fetch())
    }

    pub fn invalidate(&self) {
        self.cache.invalidate();
    }

    fn fetch(&self) -> Result<NationalTable, AppError> {
        let income_csv = fetch_text(self.client.http(), &self.sources.income_url)?;
        let income = parse_income_csv(income_csv.as_bytes())?;

        let gini = self.client.fetch_series(&self.sources.gini_url)?;
        let unemployment = self.client.fetch_series(&self.sources.unemployment_url)?;

        Ok(merge_series(&income, &gini, &unemployment))
    }
}

/// Left-join the indicator series onto the income series by exact year.
///
/// Income years are already deduplicated and ascending (`BTreeMap`), so the
/// output table inherits both invariants directly.
pub fn merge_series(
    income: &BTreeMap<i32, f64>,
    gini: &[IndicatorObservation],
    unemployment: &[IndicatorObservation],
) -> NationalTable {
    let gini_by_year = index_by_year(gini);
    let unemployment_by_year = index_by_year(unemployment);

    let records = income
        .iter()
        .map(|(&year, &gni_per_capita)| NationalRecord {
            year,
            gni_per_capita,
            gini: gini_by_year.get(&year).copied(),
            unemployment: unemployment_by_year.get(&year).copied(),
        })
        .collect();

    NationalTable::new(records)
}

fn index_by_year(series: &[IndicatorObservation]) -> HashMap<i32, f64> {
    series.iter().map(|obs| (obs.year, obs.value)).collect()
}
