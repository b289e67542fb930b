//! Rule qualification and affinity scoring for a single definition.

use std::collections::BTreeSet;

use crate::{CommunityDefinition, Tag};

/// Score every qualifying definition starts from.
pub const BASE_SCORE: u32 = 100;
/// Score added per required tag.
pub const REQUIRED_TAG_WEIGHT: u32 = 40;
/// Score added per boost tag present in the user's tag set.
pub const BOOST_TAG_WEIGHT: u32 = 12;

/// Integer weights for the affinity score.
///
/// A qualifying definition scores
/// `base + per_required * |requires| + per_boost * |present boosts|`.
/// Required tags weigh more than boosts so that more specific definitions
/// outrank broader ones when boosts are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Starting score for any qualifying definition.
    pub base: u32,
    /// Increment per required tag.
    pub per_required: u32,
    /// Increment per present boost tag.
    pub per_boost: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: BASE_SCORE,
            per_required: REQUIRED_TAG_WEIGHT,
            per_boost: BOOST_TAG_WEIGHT,
        }
    }
}

/// Pass/fail outcome of [`qualify`] with the resulting score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Qualification {
    /// Every required tag was present.
    pub qualifies: bool,
    /// Affinity score; `0` when the definition does not qualify.
    pub score: u32,
}

impl Qualification {
    const FAILED: Self = Self {
        qualifies: false,
        score: 0,
    };
}

/// A qualifying definition with its score and the tags that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate<'c> {
    /// The catalog entry.
    pub definition: &'c CommunityDefinition,
    /// Affinity score.
    pub score: u32,
    /// Required tags, all of which matched.
    pub matched_requires: Vec<&'c Tag>,
    /// Boost tags present in the user's tag set.
    pub matched_boosts: Vec<&'c Tag>,
}

impl ScoreWeights {
    /// Score `definition` against `tags`, returning `None` unless every
    /// required tag is present.
    #[must_use]
    pub fn score<'c>(
        self,
        definition: &'c CommunityDefinition,
        tags: &BTreeSet<Tag>,
    ) -> Option<ScoredCandidate<'c>> {
        if !definition.requires().iter().all(|tag| tags.contains(tag)) {
            return None;
        }
        let matched_boosts: Vec<&Tag> = definition
            .boosts()
            .iter()
            .filter(|tag| tags.contains(*tag))
            .collect();
        let score = self
            .base
            .saturating_add(
                self.per_required
                    .saturating_mul(saturating_count(definition.requires().len())),
            )
            .saturating_add(
                self.per_boost
                    .saturating_mul(saturating_count(matched_boosts.len())),
            );
        Some(ScoredCandidate {
            definition,
            score,
            matched_requires: definition.requires().iter().collect(),
            matched_boosts,
        })
    }

    /// Decide qualification and score without keeping match details.
    #[must_use]
    pub fn qualify(self, definition: &CommunityDefinition, tags: &BTreeSet<Tag>) -> Qualification {
        self.score(definition, tags)
            .map_or(Qualification::FAILED, |candidate| Qualification {
                qualifies: true,
                score: candidate.score,
            })
    }
}

fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Qualify `definition` against `tags` with the default weights.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use kinmatch_core::{CommunityDefinition, Tag, Tone, qualify};
///
/// # fn main() -> Result<(), kinmatch_core::CommunityDefinitionError> {
/// let definition =
///     CommunityDefinition::new("a", "A", ["nyc", "late_20s"], ["anxiety"], Tone::Neutral)?;
/// let tags: BTreeSet<Tag> = ["nyc", "late_20s", "anxiety"]
///     .into_iter()
///     .filter_map(Tag::parse)
///     .collect();
/// let outcome = qualify(&definition, &tags);
/// assert!(outcome.qualifies);
/// assert_eq!(outcome.score, 192);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn qualify(definition: &CommunityDefinition, tags: &BTreeSet<Tag>) -> Qualification {
    ScoreWeights::default().qualify(definition, tags)
}
