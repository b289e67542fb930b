//! Error types emitted by the `kinmatch` CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use kinmatch_catalog::CatalogLoadError;
use thiserror::Error;

/// Errors emitted by the `kinmatch` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Argument name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// `--max-total` was zero.
    #[error("--max-total must be at least 1")]
    InvalidMaxTotal,
    /// A referenced input path does not exist or is not a file.
    #[error("{field} path {path} does not exist or is not a file")]
    MissingSourceFile {
        /// Argument name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path}: {source}")]
    InspectSourcePath {
        /// Argument name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading the profile document failed.
    #[error("failed to read profile {path}: {source}")]
    ReadProfile {
        /// Profile location.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The profile document is not a JSON object of answers.
    #[error("failed to parse profile JSON at {path}: {source}")]
    ParseProfile {
        /// Profile location.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Loading the catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),
    /// Serializing the assigned communities failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
