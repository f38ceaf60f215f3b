//! State panel loader.
//!
//! The state-year panel arrives pre-joined (income, inequality, region,
//! year per state); this loader fetches it and deserializes it verbatim.
//! It trusts the upstream schema: no renaming, no coercion beyond what the
//! CSV parser does natively. Downstream filtering validates what it needs.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{FETCH_TIMEOUT, Sources};
use crate::data::cache::CacheSlot;
use crate::data::fetch_text;
use crate::domain::{StatePanel, StateYearRecord};
use crate::error::AppError;

pub struct StatePanelLoader {
    sources: Sources,
    client: Client,
    cache: CacheSlot<StatePanel>,
}

impl StatePanelLoader {
    pub fn new(sources: Sources) -> Result<Self, AppError> {
        Self::with_timeout(sources, FETCH_TIMEOUT)
    }

    pub fn with_timeout(sources: Sources, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::unavailable(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            sources,
            client,
            cache: CacheSlot::new(),
        })
    }

    /// Load the panel, memoized for the process lifetime (errors included).
    pub fn load(&self) -> Result<StatePanel, AppError> {
        self.cache.get_or_load(|| {
            let body = fetch_text(&self.client, &self.sources.states_url)?;
            parse_state_panel(body.as_bytes())
        })
    }

    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}

/// Deserialize the panel CSV. Any row that does not fit the schema fails
/// the whole parse; this loader does not patch upstream data.
pub fn parse_state_panel(input: impl std::io::Read) -> Result<StatePanel, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for row in reader.deserialize::<StateYearRecord>() {
        let record =
            row.map_err(|e| AppError::malformed(format!("Bad state panel row: {e}")))?;
        records.push(record);
    }

    Ok(StatePanel::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Region;

    #[test]
    fn parses_well_formed_panel() {
        let csv = "Estado,Regiao,Ano,PIB_per_Capita,Gini\n\
                   São Paulo,Sudeste,2022,56000.5,0.53\n\
                   Ceará,Nordeste,2022,18000.0,0.56\n\
                   Mato Grosso,Centro-Oeste,2022,50000.0,0.47\n";
        let panel = parse_state_panel(csv.as_bytes()).unwrap();

        assert_eq!(panel.len(), 3);
        let rows = panel.records();
        assert_eq!(rows[0].estado, "São Paulo");
        assert_eq!(rows[0].regiao, Region::Sudeste);
        assert_eq!(rows[2].regiao, Region::CentroOeste);
        assert_eq!(rows[1].pib_per_capita, 18_000.0);
    }

    #[test]
    fn missing_column_is_malformed_payload() {
        let csv = "Estado,Ano,PIB_per_Capita,Gini\nSão Paulo,2022,56000.5,0.53\n";
        let err = parse_state_panel(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::MalformedPayload);
    }

    #[test]
    fn unknown_region_label_is_malformed_payload() {
        let csv = "Estado,Regiao,Ano,PIB_per_Capita,Gini\nAtlântida,Oeste,2022,1.0,0.5\n";
        let err = parse_state_panel(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::MalformedPayload);
    }
}
