//! CLI module for the casefit demonstration binary
//!
//! ## Commands
//!
//! - `run [SUITE]...` - Run built-in suites (all by default) and print their verdicts
//! - `list` - List the built-in suites
//!
//! Invoking the binary without a subcommand behaves like `run` with no suite names.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod suites;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::CASEFIT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// At least one selected suite is dangerous.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The command line could not be acted on.
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<suites::SuiteError> for CliError {
    fn from(err: suites::SuiteError) -> Self {
        CliError::usage(format!("Error: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Run single-function test suites and report which are safe
#[derive(Parser, Debug)]
#[command(name = "casefit")]
#[command(version = CASEFIT_VERSION)]
#[command(about = "Run single-function test suites and report which are safe", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run built-in suites and print their verdicts
    Run {
        /// Suites to run (default: all)
        #[arg(value_name = "SUITE")]
        suites: Vec<String>,
        /// Print the detailed report under each verdict
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the built-in suites
    List,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Run { suites, verbose }) => commands::run_suites(&suites, verbose),
        Some(Command::List) => commands::list_suites(),
        None => commands::run_suites(&[], false),
    }
}

// ============================================================================
// Tests
// ============================================================================
