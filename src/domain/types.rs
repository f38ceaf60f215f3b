//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - assembled once by the loaders and cached for the process lifetime
//! - handed to the presentation boundary as read-only filtered copies
//! - exported to JSON/CSV later without further conversion

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One non-null observation of a national indicator, produced while parsing
/// a statistical-API response and discarded once folded into the national
/// table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorObservation {
    pub year: i32,
    pub value: f64,
}

/// One row of the national time series.
///
/// The income figure is always present; the indicator columns are `None` for
/// years without a published measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalRecord {
    pub year: i32,
    pub gni_per_capita: f64,
    pub gini: Option<f64>,
    pub unemployment: Option<f64>,
}

/// National time series, sorted ascending by year with unique years.
///
/// Both invariants are established by the loader's merge step; the wrapper
/// exists so consumers never reach for an unsorted `Vec` by accident.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NationalTable {
    records: Vec<NationalRecord>,
}

impl NationalTable {
    /// Wrap loader output. Callers are expected to have deduplicated and
    /// sorted; this constructor re-sorts as a belt check but does not dedup.
    pub fn new(mut records: Vec<NationalRecord>) -> Self {
        records.sort_by_key(|r| r.year);
        Self { records }
    }

    pub fn records(&self) -> &[NationalRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// The five Brazilian macro-regions.
///
/// The upstream panel only ever carries these five labels; an unknown label
/// is a malformed payload, not a sixth region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Region {
    Norte,
    Nordeste,
    Sudeste,
    Sul,
    #[serde(rename = "Centro-Oeste")]
    #[value(name = "centro-oeste")]
    CentroOeste,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Norte,
        Region::Nordeste,
        Region::Sudeste,
        Region::Sul,
        Region::CentroOeste,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Region::Norte => "Norte",
            Region::Nordeste => "Nordeste",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
            Region::CentroOeste => "Centro-Oeste",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One row of the state-year panel, deserialized verbatim from the upstream
/// CSV (its headers are the serde names below).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateYearRecord {
    #[serde(rename = "Estado")]
    pub estado: String,
    #[serde(rename = "Regiao")]
    pub regiao: Region,
    #[serde(rename = "Ano")]
    pub ano: i32,
    #[serde(rename = "PIB_per_Capita")]
    pub pib_per_capita: f64,
    #[serde(rename = "Gini")]
    pub gini: f64,
}

/// State-year panel as loaded. `(estado, ano)` uniqueness is an upstream
/// contract the loader does not re-check; filtering produces copies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatePanel {
    records: Vec<StateYearRecord>,
}

impl StatePanel {
    pub fn new(records: Vec<StateYearRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StateYearRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Min and max year present in the panel, used to default the year
    /// filter to the latest available year.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.ano).min()?;
        let max = self.records.iter().map(|r| r.ano).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(estado: &str, regiao: Region, ano: i32) -> StateYearRecord {
        StateYearRecord {
            estado: estado.to_string(),
            regiao,
            ano,
            pib_per_capita: 10_000.0,
            gini: 0.5,
        }
    }

    #[test]
    fn national_table_sorts_on_construction() {
        let table = NationalTable::new(vec![
            NationalRecord {
                year: 2020,
                gni_per_capita: 14_500.0,
                gini: None,
                unemployment: None,
            },
            NationalRecord {
                year: 2010,
                gni_per_capita: 13_000.0,
                gini: Some(0.52),
                unemployment: Some(7.9),
            },
        ]);
        let years: Vec<i32> = table.records().iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2010, 2020]);
    }

    #[test]
    fn year_range_spans_panel() {
        let panel = StatePanel::new(vec![
            row("Ceará", Region::Nordeste, 2016),
            row("Paraná", Region::Sul, 2022),
            row("Pará", Region::Norte, 2019),
        ]);
        assert_eq!(panel.year_range(), Some((2016, 2022)));
        assert_eq!(StatePanel::default().year_range(), None);
    }

    #[test]
    fn region_parses_from_csv_label() {
        // The panel CSV spells the fifth region with a hyphen.
        let r: Region = serde_json::from_str("\"Centro-Oeste\"").unwrap();
        assert_eq!(r, Region::CentroOeste);
        assert_eq!(r.to_string(), "Centro-Oeste");
    }
}
