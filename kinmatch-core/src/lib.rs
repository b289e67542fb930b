//! Core matching engine for Kin community suggestions.
//!
//! The engine is three pure stages run in order for every evaluation:
//!
//! 1. [`extract`] turns a [`Profile`] of raw onboarding answers into a
//!    [`UserContext`] of canonical [`Tag`]s, expanding colloquial answers
//!    through the [`AliasTable`].
//! 2. [`qualify`] checks one [`CommunityDefinition`] against that tag set and
//!    scores it.
//! 3. [`assign`] ranks every qualifying definition in a [`Catalog`] and
//!    buckets the best into [`Section`]s, attaching short descriptors.
//!
//! None of these stages fail. Validation happens when definitions and
//! catalogs are constructed.

#![forbid(unsafe_code)]

mod alias;
mod assign;
mod community;
mod context;
mod profile;
mod qualify;
mod tag;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use alias::{AliasMatcher, AliasRule, AliasTable, DEFAULT_ALIAS_RULES};
pub use assign::{
    AssignedCommunity, DEFAULT_MAX_TOTAL, PLACEHOLDER_KEY, PLACEHOLDER_NAME, Ranker,
    RankingPolicy, Section, assign,
};
pub use community::{Catalog, CatalogError, CommunityDefinition, CommunityDefinitionError, Tone};
pub use context::{Category, UserContext, extract};
pub use profile::{FieldValue, Profile};
pub use qualify::{
    BASE_SCORE, BOOST_TAG_WEIGHT, Qualification, REQUIRED_TAG_WEIGHT, ScoreWeights,
    ScoredCandidate, qualify,
};
pub use tag::Tag;
