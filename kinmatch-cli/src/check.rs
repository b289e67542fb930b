//! `check` command: validate a catalog document.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use kinmatch_catalog::load_catalog;

use crate::matching::require_file;
use crate::{ARG_CATALOG, CliError};

/// CLI arguments for the `check` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(about = "Validate a catalog document")]
pub(crate) struct CheckArgs {
    /// Path to the catalog document.
    #[arg(value_name = "path")]
    pub(crate) catalog: Utf8PathBuf,
}

pub(crate) fn run_check_with(args: &CheckArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    require_file(&args.catalog, ARG_CATALOG)?;
    let catalog = load_catalog(&args.catalog)?;
    writeln!(
        writer,
        "{} communities loaded from {}",
        catalog.len(),
        args.catalog
    )
    .map_err(CliError::WriteOutput)
}
