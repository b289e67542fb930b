//! `match` command: assign communities to a saved profile.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use kinmatch_catalog::{builtin_catalog, load_catalog};
use kinmatch_core::{AssignedCommunity, Catalog, DEFAULT_MAX_TOTAL, Profile, Ranker};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CATALOG, ARG_MAX_TOTAL, ARG_PROFILE, CliError, ENV_PROFILE};

/// CLI arguments for the `match` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Evaluate a saved onboarding profile (a JSON object of \
                 answers) against the built-in Kin catalog, or a catalog \
                 document given with --catalog, and print the assigned \
                 communities as JSON.",
    about = "Assign communities to an onboarding profile"
)]
#[ortho_config(prefix = "KINMATCH")]
pub(crate) struct MatchArgs {
    /// Path to a JSON file containing the profile answers.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) profile_path: Option<Utf8PathBuf>,
    /// Catalog document to use instead of the built-in catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum number of communities to print (default 5).
    #[arg(long = ARG_MAX_TOTAL, value_name = "n")]
    #[serde(default)]
    pub(crate) max_total: Option<usize>,
}

impl MatchArgs {
    fn into_config(self) -> Result<MatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MatchConfig::try_from(merged)
    }
}

/// Resolved `match` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchConfig {
    /// Path to the profile document.
    pub(crate) profile_path: Utf8PathBuf,
    /// Optional catalog document; the built-in catalog when absent.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Output cap, at least 1.
    pub(crate) max_total: usize,
}

impl MatchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_file(&self.profile_path, ARG_PROFILE)?;
        if let Some(catalog) = &self.catalog {
            require_file(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }
}

pub(crate) fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match kinmatch_fs::is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl TryFrom<MatchArgs> for MatchConfig {
    type Error = CliError;

    fn try_from(args: MatchArgs) -> Result<Self, Self::Error> {
        let profile_path = args.profile_path.ok_or(CliError::MissingArgument {
            field: ARG_PROFILE,
            env: ENV_PROFILE,
        })?;
        let max_total = args.max_total.unwrap_or(DEFAULT_MAX_TOTAL);
        if max_total == 0 {
            return Err(CliError::InvalidMaxTotal);
        }
        Ok(Self {
            profile_path,
            catalog: args.catalog,
            max_total,
        })
    }
}

pub(crate) fn run_match_with(args: MatchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let profile = load_profile(&config.profile_path)?;
    let catalog = resolve_catalog(config.catalog.as_deref())?;
    let assigned = Ranker::default().assign(&profile, &catalog, config.max_total);
    debug!(
        "assigned {} communities to {}",
        assigned.len(),
        config.profile_path
    );
    write_assigned(writer, &assigned)
}

fn resolve_catalog(path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    let catalog = match path {
        Some(location) => load_catalog(location)?,
        None => builtin_catalog()?,
    };
    Ok(catalog)
}

/// Load a JSON-encoded [`Profile`] from disk.
pub(crate) fn load_profile(path: &Utf8Path) -> Result<Profile, CliError> {
    let json = kinmatch_fs::read_document(path).map_err(|source| CliError::ReadProfile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| CliError::ParseProfile {
        path: path.to_path_buf(),
        source,
    })
}

fn write_assigned(writer: &mut dyn Write, assigned: &[AssignedCommunity]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(assigned).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<MatchConfig, CliError> {
    let merged = MatchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    MatchConfig::try_from(merged)
}
