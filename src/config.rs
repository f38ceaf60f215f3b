//! Source configuration.
//!
//! The dashboard consumes exactly three remote sources; their locations are
//! the only configuration. Each URL can be overridden through the
//! environment (`.env` is honored via dotenvy) so tests and mirrors can
//! point elsewhere without code changes.

use std::time::Duration;

const DEFAULT_INCOME_URL: &str =
    "https://github.com/leticiaborsaro/trabalho_dados/blob/main/Brazil.csv?raw=true";
const DEFAULT_GINI_URL: &str =
    "https://api.worldbank.org/v2/country/BR/indicator/SI.POV.GINI";
const DEFAULT_UNEMPLOYMENT_URL: &str =
    "https://api.worldbank.org/v2/country/BR/indicator/SL.UEM.TOTL.ZS";
const DEFAULT_STATES_URL: &str =
    "https://github.com/leticiaborsaro/trabalho_dados/blob/main/dados_estaduais_ibge.csv?raw=true";

/// Bounded timeout applied to every remote fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved locations of the three remote sources.
#[derive(Debug, Clone)]
pub struct Sources {
    /// Long-format national indicator table (CSV, `key`/`value` columns).
    pub income_url: String,
    /// Statistical-API endpoint for the national Gini index.
    pub gini_url: String,
    /// Statistical-API endpoint for the national unemployment rate.
    pub unemployment_url: String,
    /// Pre-joined state-year panel (CSV).
    pub states_url: String,
}

impl Sources {
    /// Read source locations from the environment, falling back to the
    /// published dataset URLs.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            income_url: env_or("ODS_INCOME_URL", DEFAULT_INCOME_URL),
            gini_url: env_or("ODS_GINI_URL", DEFAULT_GINI_URL),
            unemployment_url: env_or("ODS_UNEMPLOYMENT_URL", DEFAULT_UNEMPLOYMENT_URL),
            states_url: env_or("ODS_STATES_URL", DEFAULT_STATES_URL),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
