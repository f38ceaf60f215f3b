//! Data acquisition and normalization.
//!
//! Two independent loaders feed the presentation boundary:
//!
//! - `national`: income extraction + statistical-API indicators, merged
//! - `states`: the pre-joined state-year panel, taken verbatim
//!
//! Both memoize their outcome in a single process-local cache slot and
//! convert every fetch/parse failure into an `AppError` instead of letting
//! it escape as a panic.

use reqwest::blocking::Client;

use crate::error::AppError;

pub mod cache;
pub mod income;
pub mod national;
pub mod states;
pub mod worldbank;

pub use national::NationalSeriesLoader;
pub use states::StatePanelLoader;

/// Fetch a remote tabular file as text, with the client's bounded timeout.
pub(crate) fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    let resp = client
        .get(url)
        .send()
        .map_err(|e| AppError::unavailable(format!("Request to {url} failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(AppError::unavailable(format!(
            "Request to {url} failed with status {}.",
            resp.status()
        )));
    }

    resp.text()
        .map_err(|e| AppError::unavailable(format!("Failed to read response body: {e}")))
}
