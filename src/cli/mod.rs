//! Command-line parsing for the dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the loading/stats code.

use clap::{Parser, Subcommand};

use crate::domain::Region;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "ods",
    version,
    about = "Economic growth vs. income inequality in Brazil (national and state level)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the national series (GNI per capita, Gini, unemployment) and
    /// its summary statistics.
    National,
    /// Print the state-year panel, ranked by PIB per capita, with
    /// disparity lookups. Filterable by year and macro-region.
    States(PanelArgs),
    /// Condensed national + state view.
    ///
    /// This is also what plain `ods` runs.
    Summary(PanelArgs),
}

/// Filters over the state panel.
#[derive(Debug, Parser, Clone, Default)]
pub struct PanelArgs {
    /// Year to rank states in. Defaults to the latest year in the panel.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Keep every year instead of defaulting to the latest.
    #[arg(long, conflicts_with = "year")]
    pub all_years: bool,

    /// Restrict to these macro-regions (repeatable).
    #[arg(short, long, value_enum)]
    pub region: Vec<Region>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_states_filters() {
        let cli = Cli::parse_from(["ods", "states", "--year", "2022", "-r", "sul", "-r", "norte"]);
        let Command::States(args) = cli.command else {
            panic!("expected states subcommand");
        };
        assert_eq!(args.year, Some(2022));
        assert_eq!(args.region, vec![Region::Sul, Region::Norte]);
    }

    #[test]
    fn centro_oeste_region_value_parses() {
        let cli = Cli::parse_from(["ods", "states", "--region", "centro-oeste"]);
        let Command::States(args) = cli.command else {
            panic!("expected states subcommand");
        };
        assert_eq!(args.region, vec![Region::CentroOeste]);
    }
}
