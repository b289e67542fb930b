//! Facade crate for the Kin community matching engine.
//!
//! This crate re-exports the core matching types and, behind the
//! `builtin-catalog` feature, the catalog loaders and the built-in Kin
//! catalog.
//!
//! ```
//! # #[cfg(feature = "builtin-catalog")]
//! # fn main() -> Result<(), kinmatch::CatalogLoadError> {
//! use kinmatch::{Profile, Section, assign, builtin_catalog};
//!
//! let profile = Profile::new()
//!     .with_field("city", "Queens")
//!     .with_field("age_range", "Late 20s");
//! let catalog = builtin_catalog()?;
//! let assigned = assign(&profile, &catalog, 5);
//! assert_eq!(assigned[0].key, "nyc_quarter_life_crisis");
//! assert_eq!(assigned[0].section, Section::Primary);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "builtin-catalog"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use kinmatch_core::{
    AliasMatcher, AliasRule, AliasTable, AssignedCommunity, BASE_SCORE, BOOST_TAG_WEIGHT, Catalog,
    CatalogError, Category, CommunityDefinition, CommunityDefinitionError, DEFAULT_ALIAS_RULES,
    DEFAULT_MAX_TOTAL, FieldValue, PLACEHOLDER_KEY, PLACEHOLDER_NAME, Profile, Qualification,
    REQUIRED_TAG_WEIGHT, Ranker, RankingPolicy, ScoreWeights, ScoredCandidate, Section, Tag, Tone,
    UserContext, assign, extract, qualify,
};

#[cfg(feature = "builtin-catalog")]
pub use kinmatch_catalog::{
    BUILTIN_CATALOG_JSON, CatalogLoadError, builtin_catalog, load_catalog, parse_catalog,
};
