//! `ods-dashboard` library crate.
//!
//! The binary (`ods`) is a thin wrapper around this library so that:
//!
//! - the acquisition/normalization pipeline is testable without spawning
//!   processes or touching the network
//! - modules are reusable (e.g., a future TUI or web front end)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;
pub mod stats;
