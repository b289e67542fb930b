//! Catalog sources for the Kin matching engine.
//!
//! Responsibilities:
//! - Parse declarative JSON catalog documents into a validated [`Catalog`].
//! - Ship the canonical seed catalog compiled into the binary.
//!
//! Boundaries:
//! - Matching rules live in `kinmatch-core`; this crate only builds catalogs.
//!
//! Invariants:
//! - A loaded catalog has unique keys and every definition requires at least
//!   one tag.
#![forbid(unsafe_code)]

mod error;
mod schema;

use camino::Utf8Path;
use kinmatch_core::{Catalog, CommunityDefinition};
use log::{info, warn};

pub use error::CatalogLoadError;
pub use schema::{CATALOG_VERSION, CatalogDocument, CommunityRecord};

/// JSON source of the built-in catalog.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../catalog/kins.json");

/// Parse and validate a catalog document.
///
/// # Errors
/// Returns [`CatalogLoadError`] when the JSON is malformed, declares an
/// unsupported version, or describes an invalid catalog.
///
/// # Examples
/// ```
/// use kinmatch_catalog::parse_catalog;
///
/// # fn main() -> Result<(), kinmatch_catalog::CatalogLoadError> {
/// let catalog = parse_catalog(
///     r#"{"version": 1, "communities": [
///         {"key": "vintage", "name": "Vintage", "requires": ["vintage"]}
///     ]}"#,
/// )?;
/// assert_eq!(catalog.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogLoadError> {
    let document: CatalogDocument =
        serde_json::from_str(json).map_err(|source| CatalogLoadError::Parse {
            path: None,
            source,
        })?;
    catalog_from_document(document)
}

/// Validate an already deserialized document.
///
/// # Errors
/// Returns [`CatalogLoadError::UnsupportedVersion`] or
/// [`CatalogLoadError::Invalid`].
pub fn catalog_from_document(document: CatalogDocument) -> Result<Catalog, CatalogLoadError> {
    if document.version != CATALOG_VERSION {
        return Err(CatalogLoadError::UnsupportedVersion {
            found: document.version,
            expected: CATALOG_VERSION,
        });
    }
    let definitions = document
        .communities
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_definition(index))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| CatalogLoadError::Invalid { path: None, source })?;
    definitions.iter().for_each(warn_on_required_boosts);
    Catalog::new(definitions).map_err(|source| CatalogLoadError::Invalid { path: None, source })
}

fn warn_on_required_boosts(definition: &CommunityDefinition) {
    for tag in definition.required_boosts() {
        warn!(
            "community {} lists {tag} as both required and boost",
            definition.key()
        );
    }
}

/// Load a catalog document from disk.
///
/// # Errors
/// Returns [`CatalogLoadError::Read`] when the file cannot be read, or any
/// error from [`parse_catalog`] annotated with `path`.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, CatalogLoadError> {
    let json = kinmatch_fs::read_document(path).map_err(|source| CatalogLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&json).map_err(|err| err.at(path))?;
    info!("loaded {} communities from {path}", catalog.len());
    Ok(catalog)
}

/// Build the canonical seed catalog.
///
/// # Errors
/// Fails only if the embedded document is invalid, which the crate's tests
/// rule out.
pub fn builtin_catalog() -> Result<Catalog, CatalogLoadError> {
    let catalog = parse_catalog(BUILTIN_CATALOG_JSON)?;
    info!("loaded {} built-in communities", catalog.len());
    Ok(catalog)
}
