//! Statistical-API client for national indicator series.
//!
//! The API (World Bank v2 shape) answers with a two-element JSON array:
//! element 0 is pagination metadata, element 1 is the observation list.
//! Observations look like `{"date": "2010", "value": 52.9, ...}` where
//! `value` may be a number, a numeric string, or null (no published
//! measurement for that year).
//!
//! The payload is treated as untrusted: missing keys, null values, and short
//! top-level arrays must never crash the loader. A short array means the
//! indicator has no observations, which is an empty series and not an error.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::FETCH_TIMEOUT;
use crate::domain::IndicatorObservation;
use crate::error::AppError;

pub struct IndicatorClient {
    client: Client,
}

impl IndicatorClient {
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::unavailable(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch one indicator series. Observations with a null or non-numeric
    /// value are dropped; the rest become `IndicatorObservation`s.
    pub fn fetch_series(&self, endpoint: &str) -> Result<Vec<IndicatorObservation>, AppError> {
        let resp = self
            .client
            .get(endpoint)
            .query(&[("format", "json"), ("per_page", "100")])
            .send()
            .map_err(|e| AppError::unavailable(format!("Indicator request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::unavailable(format!(
                "Indicator request failed with status {}.",
                resp.status()
            )));
        }

        let body: Value = resp
            .json()
            .map_err(|e| AppError::malformed(format!("Failed to parse indicator response: {e}")))?;

        parse_series(&body)
    }

    /// The underlying HTTP client, shared with the CSV fetches so every
    /// remote call carries the same bounded timeout.
    pub fn http(&self) -> &Client {
        &self.client
    }
}

/// Parse the `[metadata, observations]` body into a series.
pub fn parse_series(body: &Value) -> Result<Vec<IndicatorObservation>, AppError> {
    let top = body
        .as_array()
        .ok_or_else(|| AppError::malformed("Indicator response is not a JSON array."))?;

    // Fewer than two elements: the API's way of saying "nothing here"
    // (typically an error-message object). Empty series, not a failure.
    let Some(observations) = top.get(1) else {
        return Ok(Vec::new());
    };
    let observations = match observations {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        _ => {
            return Err(AppError::malformed(
                "Indicator observation list is not an array.",
            ));
        }
    };

    let mut out = Vec::new();
    for item in observations {
        let Some(year) = item.get("date").and_then(parse_year) else {
            continue;
        };
        let Some(value) = item.get("value").and_then(coerce_f64) else {
            continue;
        };
        out.push(IndicatorObservation { year, value });
    }

    Ok(out)
}

fn parse_year(date: &Value) -> Option<i32> {
    match date {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        _ => None,
    }
}

/// Accept a JSON number or a numeric string; anything else (null included)
/// is "no measurement".
fn coerce_f64(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    if v.is_finite() { Some(v) } else { None }
}
