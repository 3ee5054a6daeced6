//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use super::suites::{self, SUITES, SuiteReport};
use super::{CliResult, ExitCode};

/// Run the named suites (every suite when `names` is empty) and print their verdicts to stdout.
pub fn run_suites(names: &[String], verbose: bool) -> CliResult<ExitCode> {
    let selected = suites::select(names)?;
    let reports: Vec<SuiteReport> = selected.iter().map(|suite| suite.evaluate()).collect();

    print!("{}", format_reports(&reports, verbose));

    if reports.iter().all(|r| r.safe) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Print each suite name with its description.
pub fn list_suites() -> CliResult<ExitCode> {
    print!("{}", format_listing());
    Ok(ExitCode::SUCCESS)
}

fn format_reports(reports: &[SuiteReport], verbose: bool) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&report.summary);
        out.push('\n');
        if verbose {
            out.push_str(&report.detailed);
            out.push('\n');
        }
    }
    out
}

fn format_listing() -> String {
    let width = SUITES.iter().map(|s| s.name.len()).max().unwrap_or(0);
    SUITES
        .iter()
        .map(|s| format!("{:<width$}  {}\n", s.name, s.about))
        .collect()
}
