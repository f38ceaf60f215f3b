//! Reporting utilities: rankings and formatted terminal output.

use crate::domain::{StatePanel, StateYearRecord};

pub mod format;

pub use format::{format_national_summary, format_state_summary};

/// States ranked by per-capita income, richest first (the CLI analogue of
/// the original ranking chart). Ties keep table order.
pub fn rank_by_income(panel: &StatePanel) -> Vec<StateYearRecord> {
    let mut rows = panel.records().to_vec();
    rows.sort_by(|a, b| {
        b.pib_per_capita
            .partial_cmp(&a.pib_per_capita)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Region;

    #[test]
    fn ranking_is_richest_first() {
        let panel = StatePanel::new(vec![
            StateYearRecord {
                estado: "Piauí".to_string(),
                regiao: Region::Nordeste,
                ano: 2022,
                pib_per_capita: 18_000.0,
                gini: 0.55,
            },
            StateYearRecord {
                estado: "São Paulo".to_string(),
                regiao: Region::Sudeste,
                ano: 2022,
                pib_per_capita: 56_000.0,
                gini: 0.53,
            },
        ]);
        let ranked = rank_by_income(&panel);
        assert_eq!(ranked[0].estado, "São Paulo");
        assert_eq!(ranked[1].estado, "Piauí");
    }
}
