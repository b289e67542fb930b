//! Serde model of a catalog document.

use kinmatch_core::{CatalogError, CommunityDefinition, Tone};
use serde::{Deserialize, Serialize};

/// Schema version written by this crate and the only one it reads.
pub const CATALOG_VERSION: u32 = 1;

/// Top-level catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    /// Schema version; must equal [`CATALOG_VERSION`].
    pub version: u32,
    /// Community records in catalog order.
    pub communities: Vec<CommunityRecord>,
}

/// One community as authored in a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommunityRecord {
    /// Unique key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Tags that must all be present.
    pub requires: Vec<String>,
    /// Tags that raise the score.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boosts: Vec<String>,
    /// Presentation tone; `neutral` when omitted.
    #[serde(default)]
    pub tone: Tone,
}

impl CommunityRecord {
    /// Validate the record into a definition.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidDefinition`] tagged with `index`.
    pub fn into_definition(self, index: usize) -> Result<CommunityDefinition, CatalogError> {
        CommunityDefinition::new(
            self.key.as_str(),
            self.name,
            &self.requires,
            &self.boosts,
            self.tone,
        )
        .map_err(|source| CatalogError::InvalidDefinition {
            index,
            key: self.key,
            source,
        })
    }
}
