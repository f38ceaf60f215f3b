//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the national time series row (`NationalRecord`) and its table
//! - the state-year panel row (`StateYearRecord`) and its panel
//! - the closed set of Brazilian macro-regions (`Region`)

pub mod types;

pub use types::*;
