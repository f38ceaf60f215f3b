//! Income extraction from the long-format national indicator table.
//!
//! The upstream CSV is a semi-structured key/value dump: every indicator the
//! source publishes is one row, with the year embedded in the `key` label,
//! e.g. `Gross National Income per capita (2015)`. This module pulls out the
//! per-capita income series and nothing else.
//!
//! Design goals:
//! - **Row-level tolerance**: rows without a usable year or value are
//!   dropped, never an error for the whole load
//! - **Strict schema** only for the two columns that must exist
//! - **Deterministic dedup**: the source does not guarantee year
//!   uniqueness, so duplicate years resolve last-write-wins in source order

use std::collections::BTreeMap;
use std::io::Read;

use crate::error::AppError;

/// Substring that selects the income rows out of the long-format table.
/// Case-sensitive on purpose; the source spells the label consistently.
const INCOME_KEY_MARKER: &str = "Gross National Income";

/// Parse the long-format CSV into a year -> income map.
///
/// The `BTreeMap` doubles as the dedup point (last insert wins) and keeps
/// the series ascending by year for the merge step.
pub fn parse_income_csv(input: impl Read) -> Result<BTreeMap<i32, f64>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::malformed(format!("Failed to read income CSV headers: {e}")))?
        .clone();

    let key_idx = column_index(&headers, "key")
        .ok_or_else(|| AppError::malformed("Income CSV is missing the 'key' column."))?;
    let value_idx = column_index(&headers, "value")
        .ok_or_else(|| AppError::malformed("Income CSV is missing the 'value' column."))?;

    let mut series = BTreeMap::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| AppError::malformed(format!("Unreadable income CSV row: {e}")))?;

        // Rows with a missing key are excluded, not errored.
        let Some(key) = record.get(key_idx) else {
            continue;
        };
        if !key.contains(INCOME_KEY_MARKER) {
            continue;
        }

        // The year lives in the first parenthesized group of the label.
        let Some(year) = year_in_parens(key) else {
            continue;
        };

        let Some(value) = record.get(value_idx).and_then(parse_income_value) else {
            continue;
        };

        series.insert(year, value);
    }

    Ok(series)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Extract the 4-digit year from the first parenthesized group of a label.
///
/// `"Gross National Income per capita (2015)"` -> `Some(2015)`. Labels with
/// no parentheses, or whose first group is not a 4-digit number, yield
/// `None`.
fn year_in_parens(key: &str) -> Option<i32> {
    let open = key.find('(')?;
    let rest = &key[open + 1..];
    let close = rest.find(')')?;
    let group = rest[..close].trim();
    if group.len() != 4 || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    group.parse().ok()
}

fn parse_income_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // The source formats large figures with thousands separators.
    let cleaned = trimmed.replace(',', "");
    let v = cleaned.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> BTreeMap<i32, f64> {
        parse_income_csv(csv.as_bytes()).unwrap()
    }

    #[test]
    fn extracts_income_rows_with_year_and_value() {
        let series = parse(
            "key,value\n\
             Gross National Income per capita (2010),14200\n\
             Life expectancy at birth (2010),75.2\n\
             Gross National Income per capita (2011),14650.5\n",
        );
        assert_eq!(series.len(), 2);
        assert_eq!(series[&2010], 14_200.0);
        assert_eq!(series[&2011], 14_650.5);
    }

    #[test]
    fn rows_without_parenthesized_year_are_dropped() {
        let series = parse(
            "key,value\n\
             Gross National Income per capita,14200\n\
             Gross National Income per capita (latest),14300\n\
             Gross National Income per capita (2012),14400\n",
        );
        assert_eq!(series.len(), 1);
        assert_eq!(series[&2012], 14_400.0);
    }

    #[test]
    fn uncoercible_values_are_dropped() {
        let series = parse(
            "key,value\n\
             Gross National Income per capita (2013),n/a\n\
             Gross National Income per capita (2014),\n\
             Gross National Income per capita (2015),\"14,850\"\n",
        );
        assert_eq!(series.len(), 1);
        assert_eq!(series[&2015], 14_850.0);
    }

    #[test]
    fn duplicate_year_is_last_write_wins() {
        let series = parse(
            "key,value\n\
             Gross National Income per capita (2016),100\n\
             Gross National Income per capita (2016),200\n",
        );
        assert_eq!(series[&2016], 200.0);
    }

    #[test]
    fn substring_match_is_case_sensitive() {
        let series = parse(
            "key,value\n\
             gross national income per capita (2017),100\n",
        );
        assert!(series.is_empty());
    }

    #[test]
    fn missing_key_column_is_malformed_payload() {
        let err = parse_income_csv("label,value\nx,1\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::MalformedPayload);
    }

    #[test]
    fn short_rows_are_skipped_not_errors() {
        // flexible(true) admits the short row; the missing key cell drops it.
        let series = parse(
            "key,value\n\
             \n\
             Gross National Income per capita (2018),14900\n",
        );
        assert_eq!(series.len(), 1);
    }
}
