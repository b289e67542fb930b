//! Community definitions and the validated catalog that holds them.
//!
//! Both types validate on construction so the matching path never has to:
//! a definition without required tags would qualify for everyone, and is
//! rejected here rather than at evaluation time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PLACEHOLDER_KEY, Tag};

/// Presentation hint for a community tile. Has no effect on scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Playful framing.
    Light,
    /// Plain framing.
    #[default]
    Neutral,
    /// Careful framing for heavy topics.
    Serious,
}

/// Errors returned by [`CommunityDefinition::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommunityDefinitionError {
    /// The key was empty or whitespace.
    #[error("community key must not be empty")]
    EmptyKey,
    /// The display name was empty or whitespace.
    #[error("community {key} must have a display name")]
    EmptyName {
        /// Key of the offending definition.
        key: String,
    },
    /// No required tag survived tokenization.
    #[error("community {key} must require at least one tag")]
    NoRequiredTags {
        /// Key of the offending definition.
        key: String,
    },
}

/// A named matching rule describing one candidate community.
///
/// `requires` and `boosts` keep their authored order, with duplicates and
/// entries that tokenize to nothing removed.
///
/// # Examples
/// ```
/// use kinmatch_core::{CommunityDefinition, Tone};
///
/// # fn main() -> Result<(), kinmatch_core::CommunityDefinitionError> {
/// let definition = CommunityDefinition::new(
///     "nyc_quarter_life_crisis",
///     "NYC Quarter-Life Crisis Files",
///     ["nyc", "Late 20s"],
///     ["anxiety"],
///     Tone::Neutral,
/// )?;
/// assert_eq!(definition.requires().len(), 2);
/// assert_eq!(definition.requires()[1].as_str(), "late_20s");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityDefinition {
    key: String,
    name: String,
    requires: Vec<Tag>,
    boosts: Vec<Tag>,
    tone: Tone,
}

impl CommunityDefinition {
    /// Validate and construct a definition, tokenizing every tag.
    ///
    /// # Errors
    /// Returns [`CommunityDefinitionError`] when the key or name is blank or
    /// when no required tag survives tokenization.
    pub fn new<R, B>(
        key: impl Into<String>,
        name: impl Into<String>,
        requires: R,
        boosts: B,
        tone: Tone,
    ) -> Result<Self, CommunityDefinitionError>
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        let key_text = key.into();
        if key_text.trim().is_empty() {
            return Err(CommunityDefinitionError::EmptyKey);
        }
        let name_text = name.into();
        if name_text.trim().is_empty() {
            return Err(CommunityDefinitionError::EmptyName { key: key_text });
        }
        let required = tokenize_unique(requires);
        if required.is_empty() {
            return Err(CommunityDefinitionError::NoRequiredTags { key: key_text });
        }
        Ok(Self {
            key: key_text,
            name: name_text,
            requires: required,
            boosts: tokenize_unique(boosts),
            tone,
        })
    }

    /// Unique identifier.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tags that must all be present for a user to qualify. Never empty.
    #[must_use]
    pub fn requires(&self) -> &[Tag] {
        &self.requires
    }

    /// Tags that raise the score of a qualifying user.
    #[must_use]
    pub fn boosts(&self) -> &[Tag] {
        &self.boosts
    }

    /// Presentation tone.
    #[must_use]
    pub const fn tone(&self) -> Tone {
        self.tone
    }

    /// Iterate required tags then boosts, skipping boosts already required.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.requires.iter().chain(
            self.boosts
                .iter()
                .filter(|boost| !self.requires.contains(boost)),
        )
    }

    /// Iterate boosts that are also listed as required.
    pub fn required_boosts(&self) -> impl Iterator<Item = &Tag> {
        self.boosts
            .iter()
            .filter(|boost| self.requires.contains(boost))
    }
}

fn tokenize_unique<I>(raw: I) -> Vec<Tag>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut tags: Vec<Tag> = Vec::new();
    for tag in raw.into_iter().filter_map(|item| Tag::parse(item.as_ref())) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Errors raised while assembling a [`Catalog`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A definition at `index` failed validation.
    #[error("community #{index} ({key:?}) is invalid")]
    InvalidDefinition {
        /// Zero-based position in the source list.
        index: usize,
        /// Key as written in the source, possibly empty.
        key: String,
        /// Validation failure.
        #[source]
        source: CommunityDefinitionError,
    },
    /// Two definitions share a key.
    #[error("community key {key} appears at positions {first} and {second}")]
    DuplicateKey {
        /// The repeated key.
        key: String,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeat.
        second: usize,
    },
    /// A definition uses the key reserved for the fallback entry.
    #[error("community #{index} uses the reserved key {key}", key = PLACEHOLDER_KEY)]
    ReservedKey {
        /// Zero-based position in the source list.
        index: usize,
    },
}

/// An ordered, validated list of community definitions.
///
/// Catalog order is the canonical tie-break when scores are equal. The
/// catalog is read-only once built and can be shared freely between
/// evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    definitions: Vec<CommunityDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate and reserved keys.
    ///
    /// # Errors
    /// Returns [`CatalogError::ReservedKey`] when a definition is keyed
    /// [`PLACEHOLDER_KEY`], or [`CatalogError::DuplicateKey`] when two
    /// definitions share a key.
    pub fn new(definitions: Vec<CommunityDefinition>) -> Result<Self, CatalogError> {
        if let Some(index) = definitions
            .iter()
            .position(|definition| definition.key() == PLACEHOLDER_KEY)
        {
            return Err(CatalogError::ReservedKey { index });
        }
        if let Some(err) = find_duplicate(&definitions) {
            return Err(err);
        }
        Ok(Self { definitions })
    }

    /// Definitions in catalog order.
    #[must_use]
    pub fn definitions(&self) -> &[CommunityDefinition] {
        &self.definitions
    }

    /// Iterate definitions in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CommunityDefinition> {
        self.definitions.iter()
    }

    /// Look up a definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CommunityDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.key() == key)
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn find_duplicate(definitions: &[CommunityDefinition]) -> Option<CatalogError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(definitions.len());
    for (index, definition) in definitions.iter().enumerate() {
        if let Some(&first) = seen.get(definition.key()) {
            return Some(CatalogError::DuplicateKey {
                key: definition.key().to_owned(),
                first,
                second: index,
            });
        }
        seen.insert(definition.key(), index);
    }
    None
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CommunityDefinition;
    type IntoIter = std::slice::Iter<'a, CommunityDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
