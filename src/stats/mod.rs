//! Derived scalars and filtered views over the loaded tables.
//!
//! The formulas here are part of the dashboard's contract even though they
//! sit at the presentation boundary: Pearson correlation between income and
//! inequality, the income growth percentage, and the state-panel disparity
//! lookups. Every statistic that is undefined for the rows at hand reports
//! `InsufficientData` instead of producing a NaN, a zero, or a panic.

use std::collections::HashSet;

use crate::domain::{NationalTable, Region, StatePanel, StateYearRecord};
use crate::error::AppError;

/// User-selected filters over the state panel.
///
/// `None` means "no constraint"; an empty region set filters everything out
/// (the multiselect analogue of deselecting every region).
#[derive(Debug, Clone, Default)]
pub struct PanelFilter {
    pub year: Option<i32>,
    pub regions: Option<HashSet<Region>>,
}

/// Produce a filtered copy of the panel; the cached original is untouched.
pub fn filter_panel(panel: &StatePanel, filter: &PanelFilter) -> StatePanel {
    let records = panel
        .records()
        .iter()
        .filter(|r| filter.year.is_none_or(|y| r.ano == y))
        .filter(|r| {
            filter
                .regions
                .as_ref()
                .is_none_or(|set| set.contains(&r.regiao))
        })
        .cloned()
        .collect();
    StatePanel::new(records)
}

/// Pearson correlation between GNI per capita and the Gini index, over the
/// rows where both are present.
pub fn gni_gini_correlation(table: &NationalTable) -> Result<f64, AppError> {
    let pairs: Vec<(f64, f64)> = table
        .records()
        .iter()
        .filter_map(|r| r.gini.map(|g| (r.gni_per_capita, g)))
        .collect();
    pearson(&pairs)
}

fn pearson(pairs: &[(f64, f64)]) -> Result<f64, AppError> {
    if pairs.len() < 2 {
        return Err(AppError::insufficient(
            "Correlation needs at least 2 rows with both values present.",
        ));
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for &(x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    // A constant series has no direction to correlate with.
    if var_x == 0.0 || var_y == 0.0 {
        return Err(AppError::insufficient(
            "Correlation is undefined for a constant series.",
        ));
    }

    Ok(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Income growth over the full sorted table:
/// `(last - first) / first * 100`.
pub fn growth_pct(table: &NationalTable) -> Result<f64, AppError> {
    let rows = table.records();
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return Err(AppError::insufficient("Growth needs a non-empty series."));
    };
    if rows.len() < 2 {
        return Err(AppError::insufficient("Growth needs at least 2 years."));
    }
    if first.gni_per_capita == 0.0 {
        return Err(AppError::insufficient(
            "Growth is undefined from a zero base year.",
        ));
    }
    Ok((last.gni_per_capita - first.gni_per_capita) / first.gni_per_capita * 100.0)
}

/// `max / min` of per-capita income over the filtered panel.
pub fn disparity_ratio(panel: &StatePanel) -> Result<f64, AppError> {
    let max = richest_state(panel)?.pib_per_capita;
    let min = poorest_state(panel)?.pib_per_capita;
    if min == 0.0 {
        return Err(AppError::insufficient(
            "Disparity ratio is undefined when the minimum income is zero.",
        ));
    }
    Ok(max / min)
}

/// Row with the highest per-capita income. Ties: first occurrence in table
/// order, a documented choice since upstream specifies none.
pub fn richest_state(panel: &StatePanel) -> Result<&StateYearRecord, AppError> {
    extreme_by(panel, |best, r| r.pib_per_capita > best.pib_per_capita)
}

/// Row with the lowest per-capita income. Ties: first occurrence.
pub fn poorest_state(panel: &StatePanel) -> Result<&StateYearRecord, AppError> {
    extreme_by(panel, |best, r| r.pib_per_capita < best.pib_per_capita)
}

/// Row with the lowest Gini index. Ties: first occurrence.
pub fn most_equal_state(panel: &StatePanel) -> Result<&StateYearRecord, AppError> {
    extreme_by(panel, |best, r| r.gini < best.gini)
}

fn extreme_by(
    panel: &StatePanel,
    better: impl Fn(&StateYearRecord, &StateYearRecord) -> bool,
) -> Result<&StateYearRecord, AppError> {
    let mut rows = panel.records().iter();
    let Some(mut best) = rows.next() else {
        return Err(AppError::insufficient(
            "No state rows match the current filter.",
        ));
    };
    for row in rows {
        // Strict comparison keeps the first occurrence on ties.
        if better(best, row) {
            best = row;
        }
    }
    Ok(best)
}
