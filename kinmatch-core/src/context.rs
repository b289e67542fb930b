//! Context extraction: raw profile answers to a normalized tag set.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{AliasTable, Profile, Tag};

/// The onboarding answer groups the engine reads.
///
/// Declaration order is the order used when searching for the original
/// phrase behind a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Life stage selections.
    LifeStage,
    /// Identity selections.
    Identity,
    /// Health condition selections.
    HealthCondition,
    /// City, neighbourhood or other location strings.
    Location,
    /// The age range answer.
    AgeRange,
}

impl Category {
    /// Every category in lookup order.
    pub const ALL: [Self; 5] = [
        Self::LifeStage,
        Self::Identity,
        Self::HealthCondition,
        Self::Location,
        Self::AgeRange,
    ];

    /// Profile keys accepted for this category, in priority order.
    #[must_use]
    pub const fn profile_keys(self) -> &'static [&'static str] {
        match self {
            Self::LifeStage => &["life_stage", "lifeStages", "life_stage_labels"],
            Self::Identity => &["identities", "identity", "identity_labels"],
            Self::HealthCondition => &["conditions", "health_conditions", "condition_labels"],
            Self::Location => &["city", "location_city", "neighborhood", "location"],
            Self::AgeRange => &["age_range", "ageRange"],
        }
    }
}

/// Normalized view of one user's answers, rebuilt on every evaluation.
///
/// # Examples
/// ```
/// use kinmatch_core::{Profile, extract};
///
/// let profile = Profile::new()
///     .with_field("city", "Brooklyn")
///     .with_field("age_range", "Late 20s");
/// let context = extract(&profile);
/// assert!(context.has_tag("nyc"));
/// assert!(context.has_tag("brooklyn"));
/// assert!(context.has_tag("late_20s"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserContext {
    tags: BTreeSet<Tag>,
    raw_groups: BTreeMap<Category, Vec<String>>,
}

impl UserContext {
    /// Extract a context using the default alias table.
    #[must_use]
    pub fn extract(profile: &Profile) -> Self {
        Self::extract_with(profile, &AliasTable::default())
    }

    /// Extract a context using a caller-supplied alias table.
    ///
    /// Missing or unreadable fields contribute nothing; extraction never
    /// fails.
    #[must_use]
    pub fn extract_with(profile: &Profile, aliases: &AliasTable<'_>) -> Self {
        let raw_groups: BTreeMap<Category, Vec<String>> = Category::ALL
            .into_iter()
            .map(|category| {
                let phrases = profile
                    .first_present(category.profile_keys())
                    .map(crate::FieldValue::strings)
                    .unwrap_or_default();
                (category, phrases)
            })
            .collect();

        let base: BTreeSet<Tag> = raw_groups
            .values()
            .flatten()
            .filter_map(|phrase| Tag::parse(phrase))
            .collect();
        let mut tags = base.clone();
        for token in &base {
            tags.extend(aliases.expand(token));
        }

        Self { tags, raw_groups }
    }

    /// Borrow the deduplicated, alias-expanded tag set.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Report whether the context carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Borrow the original phrases for one category, in input order.
    #[must_use]
    pub fn raw_group(&self, category: Category) -> &[String] {
        self.raw_groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate every original phrase in category order, then input order.
    pub fn raw_phrases(&self) -> impl Iterator<Item = &str> {
        self.raw_groups.values().flatten().map(String::as_str)
    }

    /// Find the first original phrase whose own token is `tag`.
    ///
    /// Tags introduced only by alias expansion have no original phrase.
    #[must_use]
    pub fn original_phrase(&self, tag: &Tag) -> Option<&str> {
        self.raw_phrases()
            .find(|phrase| Tag::parse(phrase).is_some_and(|token| token == *tag))
    }
}

/// Extract a [`UserContext`] from `profile` with the default alias table.
#[must_use]
pub fn extract(profile: &Profile) -> UserContext {
    UserContext::extract(profile)
}
