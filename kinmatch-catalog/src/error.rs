//! Errors produced while loading catalog documents.

use std::io;

use camino::Utf8PathBuf;
use kinmatch_core::CatalogError;
use thiserror::Error;

/// Errors returned by [`crate::load_catalog`] and [`crate::parse_catalog`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    /// The document could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// Location of the document.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The document is not valid catalog JSON.
    #[error("failed to parse catalog{}: {source}", describe(.path.as_ref()))]
    Parse {
        /// Location of the document, when it came from disk.
        path: Option<Utf8PathBuf>,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The document declares a schema version this crate does not read.
    #[error("unsupported catalog version {found}; expected {expected}")]
    UnsupportedVersion {
        /// Version declared by the document.
        found: u32,
        /// Version this crate reads.
        expected: u32,
    },
    /// The document parsed but its contents are invalid.
    #[error("invalid catalog{}: {source}", describe(.path.as_ref()))]
    Invalid {
        /// Location of the document, when it came from disk.
        path: Option<Utf8PathBuf>,
        /// Validation failure.
        source: CatalogError,
    },
}

fn describe(path: Option<&Utf8PathBuf>) -> String {
    path.map(|p| format!(" {p}")).unwrap_or_default()
}

impl CatalogLoadError {
    pub(crate) fn at(self, location: &camino::Utf8Path) -> Self {
        let located = Some(location.to_path_buf());
        match self {
            Self::Parse { source, .. } => Self::Parse {
                path: located,
                source,
            },
            Self::Invalid { source, .. } => Self::Invalid {
                path: located,
                source,
            },
            other => other,
        }
    }
}
