//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the national series and the state panel (cached per process)
//! - applies the panel filters
//! - prints summaries
//!
//! A failed source is reported and the rest of the dashboard still renders;
//! the process only errors out when nothing could be loaded at all.

use clap::Parser;

use crate::cli::{Command, PanelArgs};
use crate::domain::StatePanel;
use crate::error::AppError;
use crate::stats::{PanelFilter, filter_panel};

pub mod pipeline;

/// Entry point for the `ods` binary.
pub fn run() -> Result<(), AppError> {
    // We want plain `ods` (and `ods --year 2022`) to behave like
    // `ods summary ...`. Clap requires a subcommand name, so we do a small,
    // explicit rewrite of the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let pipeline = pipeline::Pipeline::from_env()?;

    match cli.command {
        Command::National => handle_national(&pipeline),
        Command::States(args) => handle_states(&pipeline, &args),
        Command::Summary(args) => handle_summary(&pipeline, &args),
    }
}

fn handle_national(pipeline: &pipeline::Pipeline) -> Result<(), AppError> {
    let table = pipeline.national().map_err(|err| {
        eprintln!("National data unavailable: {err}");
        err
    })?;
    println!("{}", crate::report::format_national_summary(&table));
    Ok(())
}

fn handle_states(pipeline: &pipeline::Pipeline, args: &PanelArgs) -> Result<(), AppError> {
    let panel = pipeline.states().map_err(|err| {
        eprintln!("State data unavailable: {err}");
        err
    })?;
    print_states(&panel, args);
    Ok(())
}

fn handle_summary(pipeline: &pipeline::Pipeline, args: &PanelArgs) -> Result<(), AppError> {
    let data = pipeline.load_all();

    match &data.national {
        Ok(table) => println!("{}", crate::report::format_national_summary(table)),
        Err(err) => eprintln!("National data unavailable: {err}"),
    }
    match &data.states {
        Ok(panel) => print_states(panel, args),
        Err(err) => eprintln!("State data unavailable: {err}"),
    }

    match (data.national, data.states) {
        (Err(err), Err(_)) => Err(err),
        _ => Ok(()),
    }
}

fn print_states(panel: &StatePanel, args: &PanelArgs) {
    let year = resolve_year(panel, args);
    let filter = PanelFilter {
        year,
        regions: if args.region.is_empty() {
            None
        } else {
            Some(args.region.iter().copied().collect())
        },
    };
    let filtered = filter_panel(panel, &filter);
    println!("{}", crate::report::format_state_summary(&filtered, year));
}

/// Mirror the original year slider: default to the latest available year
/// unless the user picked one or asked for all of them.
fn resolve_year(panel: &StatePanel, args: &PanelArgs) -> Option<i32> {
    if args.all_years {
        return None;
    }
    args.year.or_else(|| panel.year_range().map(|(_, max)| max))
}

/// Rewrite argv so `ods` defaults to `ods summary`.
///
/// Rules:
/// - `ods`                     -> `ods summary`
/// - `ods --year 2022 ...`     -> `ods summary --year 2022 ...`
/// - `ods --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("summary".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "national" | "states" | "summary");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "summary flags".
    if arg1.starts_with('-') {
        argv.insert(1, "summary".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Region, StateYearRecord};

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("ods")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn bare_invocation_defaults_to_summary() {
        assert_eq!(rewrite_args(argv(&[])), argv(&["summary"]));
        assert_eq!(
            rewrite_args(argv(&["--year", "2022"])),
            argv(&["summary", "--year", "2022"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(rewrite_args(argv(&["national"])), argv(&["national"]));
        assert_eq!(rewrite_args(argv(&["--help"])), argv(&["--help"]));
    }

    #[test]
    fn year_defaults_to_latest_in_panel() {
        let panel = StatePanel::new(vec![
            StateYearRecord {
                estado: "Bahia".to_string(),
                regiao: Region::Nordeste,
                ano: 2019,
                pib_per_capita: 1.0,
                gini: 0.5,
            },
            StateYearRecord {
                estado: "Bahia".to_string(),
                regiao: Region::Nordeste,
                ano: 2022,
                pib_per_capita: 1.0,
                gini: 0.5,
            },
        ]);
        assert_eq!(resolve_year(&panel, &PanelArgs::default()), Some(2022));

        let all = PanelArgs {
            all_years: true,
            ..PanelArgs::default()
        };
        assert_eq!(resolve_year(&panel, &all), None);
    }
}
