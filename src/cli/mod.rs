//! CLI module for raycheck
//!
//! ## Commands
//!
//! - `generate [dir]` - Write the case catalogue
//! - `list` - Print the catalogue
//! - `check` - Run the routine under test over every case and report verdicts
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

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SCENE_DIR, DEFAULT_TEST_DIR};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
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
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Verification harness for ray/AABB intersection executables
#[derive(Parser, Debug)]
#[command(name = "raycheck")]
#[command(version = VERSION)]
#[command(about = "Verification harness for ray/AABB intersection executables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the test-case catalogue (01.in .. 10.in)
    Generate {
        /// Output directory
        #[arg(value_name = "DIR", default_value = DEFAULT_TEST_DIR)]
        dir: PathBuf,
    },

    /// List the catalogue scenarios
    List,

    /// Run the routine under test over every case
    Check {
        /// Directory of .in test cases
        #[arg(long = "tests", value_name = "DIR", default_value = DEFAULT_TEST_DIR)]
        tests: PathBuf,
        /// Routine under test (default: ./bin/rt, ./bin/rt.exe on Windows)
        #[arg(long = "exe", value_name = "PATH")]
        exe: Option<PathBuf>,
        /// Directory rendered scenes are written to
        #[arg(long = "scenes", value_name = "DIR", default_value = DEFAULT_SCENE_DIR)]
        scenes: PathBuf,
        /// Write scenes without waiting between cases
        #[arg(long = "no-show", conflicts_with = "viewer")]
        no_show: bool,
        /// Open each scene with this command and wait for it to exit
        #[arg(long = "viewer", value_name = "CMD")]
        viewer: Option<String>,
        /// Disable colored output
        #[arg(long = "no-color")]
        no_color: bool,
        /// Only run cases whose file name contains EXPR
        #[arg(short = 'k', value_name = "EXPR")]
        filter: Option<String>,
    },
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
        Command::Generate { dir } => commands::generate(&dir),
        Command::List => commands::list(),
        Command::Check {
            tests,
            exe,
            scenes,
            no_show,
            viewer,
            no_color,
            filter,
        } => {
            let options = commands::CheckOptions {
                tests,
                exe,
                scenes,
                no_show,
                viewer,
                no_color,
                filter,
            };
            commands::check(&options)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
