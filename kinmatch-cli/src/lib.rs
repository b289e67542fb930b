//! Command-line tooling around the Kin matching engine.
//!
//! `kinmatch match` evaluates a saved onboarding profile against the
//! built-in or a supplied catalog; `kinmatch check` validates a catalog
//! document.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod check;
mod error;
mod matching;

pub use error::CliError;

use check::{CheckArgs, run_check_with};
use matching::{MatchArgs, run_match_with};

const ARG_PROFILE: &str = "profile";
const ARG_CATALOG: &str = "catalog";
const ARG_MAX_TOTAL: &str = "max-total";
const ENV_PROFILE: &str = "KINMATCH_CMDS_MATCH_PROFILE_PATH";

/// Run the CLI with the current process arguments, printing to stdout.
///
/// # Errors
/// Returns [`CliError`] when arguments, inputs or output fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli, &mut stdout)
}

fn dispatch(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Match(args) => run_match_with(args, writer),
        Command::Check(args) => run_check_with(&args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "kinmatch",
    about = "Match onboarding profiles to Kin communities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assign communities to a saved onboarding profile.
    Match(MatchArgs),
    /// Validate a catalog document.
    Check(CheckArgs),
}

#[cfg(test)]
mod tests;
