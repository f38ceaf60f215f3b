//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the loading/stats code stays clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! Statistics that cannot be computed render as a visible "insufficient
//! data" marker; a misleading zero or NaN never reaches the terminal.

use crate::domain::{NationalTable, StatePanel};
use crate::error::AppError;
use crate::report::rank_by_income;
use crate::stats;

const INSUFFICIENT: &str = "insufficient data";

/// Format the national time series plus its summary scalars.
pub fn format_national_summary(table: &NationalTable) -> String {
    let mut out = String::new();

    out.push_str("=== National series: growth vs. inequality (Brazil) ===\n");
    out.push_str(&format!("Years: {}\n", table.len()));
    out.push_str(&format!(
        "Correlation (GNI per capita vs. Gini): {}\n",
        fmt_scalar(stats::gni_gini_correlation(table), 3)
    ));
    match stats::growth_pct(table) {
        Ok(v) => out.push_str(&format!("GNI per capita growth over the series: {v:.1}%\n")),
        Err(_) => out.push_str(&format!("GNI per capita growth over the series: {INSUFFICIENT}\n")),
    }
    out.push('\n');

    out.push_str(&format!(
        "{:>6} {:>16} {:>8} {:>12}\n",
        "year", "gni_per_capita", "gini", "unemployment"
    ));
    for r in table.records() {
        out.push_str(&format!(
            "{:>6} {:>16.1} {:>8} {:>12}\n",
            r.year,
            r.gni_per_capita,
            fmt_opt(r.gini, 2),
            fmt_opt(r.unemployment, 1),
        ));
    }

    out
}

/// Format the filtered state panel: income ranking plus disparity lookups.
pub fn format_state_summary(panel: &StatePanel, year: Option<i32>) -> String {
    let mut out = String::new();

    match year {
        Some(y) => out.push_str(&format!("=== State panel ({y}) ===\n")),
        None => out.push_str("=== State panel (all years) ===\n"),
    }
    out.push_str(&format!("States: {}\n", panel.len()));
    out.push_str(&format!(
        "Disparity ratio (max/min PIB per capita): {}\n",
        fmt_scalar(stats::disparity_ratio(panel), 2)
    ));
    out.push_str(&format!(
        "Richest state: {}\n",
        fmt_state(stats::richest_state(panel).map(|r| {
            format!("{} ({}, PIB per capita {:.1})", r.estado, r.regiao, r.pib_per_capita)
        }))
    ));
    out.push_str(&format!(
        "Poorest state: {}\n",
        fmt_state(stats::poorest_state(panel).map(|r| {
            format!("{} ({}, PIB per capita {:.1})", r.estado, r.regiao, r.pib_per_capita)
        }))
    ));
    out.push_str(&format!(
        "Most equal state: {}\n",
        fmt_state(stats::most_equal_state(panel).map(|r| {
            format!("{} ({}, Gini {:.3})", r.estado, r.regiao, r.gini)
        }))
    ));
    out.push('\n');

    out.push_str(&format!(
        "{:<24} {:<14} {:>6} {:>16} {:>7}\n",
        "estado", "regiao", "ano", "pib_per_capita", "gini"
    ));
    for r in rank_by_income(panel) {
        out.push_str(&format!(
            "{:<24} {:<14} {:>6} {:>16.1} {:>7.3}\n",
            r.estado,
            r.regiao.display_name(),
            r.ano,
            r.pib_per_capita,
            r.gini,
        ));
    }

    out
}

fn fmt_scalar(value: Result<f64, AppError>, decimals: usize) -> String {
    match value {
        Ok(v) => format!("{v:.decimals$}"),
        Err(_) => INSUFFICIENT.to_string(),
    }
}

fn fmt_state(value: Result<String, AppError>) -> String {
    value.unwrap_or_else(|_| INSUFFICIENT.to_string())
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NationalRecord, Region, StateYearRecord};

    #[test]
    fn empty_national_table_renders_insufficient_not_nan() {
        let text = format_national_summary(&NationalTable::default());
        assert!(text.contains("insufficient data"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn national_summary_includes_each_year_row() {
        let table = NationalTable::new(vec![
            NationalRecord {
                year: 2010,
                gni_per_capita: 14_200.0,
                gini: Some(0.52),
                unemployment: None,
            },
            NationalRecord {
                year: 2011,
                gni_per_capita: 14_650.0,
                gini: None,
                unemployment: Some(7.9),
            },
        ]);
        let text = format_national_summary(&table);
        assert!(text.contains("2010"));
        assert!(text.contains("2011"));
        assert!(text.contains('-'), "missing indicator renders as a dash");
    }

    #[test]
    fn state_summary_reports_disparity_and_extremes() {
        let panel = StatePanel::new(vec![
            StateYearRecord {
                estado: "Paraná".to_string(),
                regiao: Region::Sul,
                ano: 2022,
                pib_per_capita: 45_000.0,
                gini: 0.49,
            },
            StateYearRecord {
                estado: "Rio Grande do Sul".to_string(),
                regiao: Region::Sul,
                ano: 2022,
                pib_per_capita: 30_000.0,
                gini: 0.51,
            },
        ]);
        let text = format_state_summary(&panel, Some(2022));
        assert!(text.contains("1.50"));
        assert!(text.contains("Richest state: Paraná"));
        assert!(text.contains("Most equal state: Paraná"));
    }
}
