//! Ranking and bucketing of qualifying communities into presentation tiers.
//!
//! [`Ranker::assign`] is total: an empty catalog, an empty profile or a
//! profile that qualifies for nothing all produce the single
//! [`AssignedCommunity::placeholder`] entry, never an error.

mod descriptor;
mod tiers;

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{Catalog, Profile, ScoreWeights, ScoredCandidate, Tone, UserContext};

/// Key of the fallback entry returned when nothing qualifies.
pub const PLACEHOLDER_KEY: &str = "starting_point";
/// Display name of the fallback entry.
pub const PLACEHOLDER_NAME: &str = "Your Starting Point";
/// Default number of tiles shown.
pub const DEFAULT_MAX_TOTAL: usize = 5;

/// Presentation bucket of an assigned community.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// The single best match.
    Primary,
    /// Strong runners-up, preferring ones that are not near-duplicates of
    /// the primary.
    #[serde(rename = "Also Relevant")]
    AlsoRelevant,
    /// One credible match chosen for breadth.
    #[serde(rename = "Keeps Coming Up")]
    KeepsComingUp,
}

impl Section {
    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::AlsoRelevant => "Also Relevant",
            Self::KeepsComingUp => "Keeps Coming Up",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tile of engine output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedCommunity {
    /// Catalog key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Affinity score.
    pub score: u32,
    /// Up to a handful of phrases explaining the match.
    pub descriptors: Vec<String>,
    /// Presentation tone.
    pub tone: Tone,
    /// Tier the community was placed in.
    pub section: Section,
}

impl AssignedCommunity {
    /// The fallback entry shown when no community qualifies.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            key: PLACEHOLDER_KEY.to_owned(),
            name: PLACEHOLDER_NAME.to_owned(),
            score: 1,
            descriptors: Vec::new(),
            tone: Tone::Neutral,
            section: Section::Primary,
        }
    }

    /// Report whether this is the fallback entry.
    ///
    /// [`Catalog::new`](crate::Catalog::new) rejects the reserved key, so
    /// no assigned community can be mistaken for the fallback.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.key == PLACEHOLDER_KEY
    }
}

/// Tier sizing and descriptor limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingPolicy {
    /// Upper bound on the Also Relevant tier.
    pub also_relevant_limit: usize,
    /// Slots of `max_total` held back from Also Relevant for the primary
    /// and breadth tiers.
    pub reserved_slots: usize,
    /// Rank runners-up whose required tags are all among the primary's
    /// behind every other runner-up when filling Also Relevant.
    pub prefer_distinct_requires: bool,
    /// Minimum score for the breadth pick, as a percentage of the primary's.
    pub breadth_floor_percent: u32,
    /// Maximum descriptors per entry.
    pub max_descriptors: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            also_relevant_limit: 3,
            reserved_slots: 2,
            prefer_distinct_requires: true,
            breadth_floor_percent: 65,
            max_descriptors: 3,
        }
    }
}

impl RankingPolicy {
    /// Size of the Also Relevant tier for a given `max_total`.
    ///
    /// # Examples
    /// ```
    /// use kinmatch_core::RankingPolicy;
    ///
    /// let policy = RankingPolicy::default();
    /// assert_eq!(policy.also_relevant_capacity(9), 3);
    /// assert_eq!(policy.also_relevant_capacity(4), 2);
    /// assert_eq!(policy.also_relevant_capacity(1), 0);
    /// ```
    #[must_use]
    pub fn also_relevant_capacity(self, max_total: usize) -> usize {
        self.also_relevant_limit
            .min(max_total.saturating_sub(self.reserved_slots))
    }

    /// Report whether `score` reaches the breadth floor relative to
    /// `primary`.
    #[must_use]
    pub fn passes_floor(self, score: u32, primary: u32) -> bool {
        u64::from(score) * 100 >= u64::from(primary) * u64::from(self.breadth_floor_percent)
    }
}

/// Scores a catalog against a user and buckets the results.
///
/// # Examples
/// ```
/// use kinmatch_core::{Catalog, CommunityDefinition, Profile, Ranker, Section, Tone};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new(vec![CommunityDefinition::new(
///     "a",
///     "A",
///     ["nyc", "late_20s"],
///     ["anxiety"],
///     Tone::Neutral,
/// )?])?;
/// let profile = Profile::new()
///     .with_field("city", "Queens")
///     .with_field("age_range", "Late 20s");
/// let assigned = Ranker::default().assign(&profile, &catalog, 5);
/// assert_eq!(assigned.len(), 1);
/// assert_eq!(assigned[0].score, 180);
/// assert_eq!(assigned[0].section, Section::Primary);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ranker {
    /// Score weights used to qualify and score definitions.
    pub weights: ScoreWeights,
    /// Tier sizing.
    pub policy: RankingPolicy,
}

impl Ranker {
    /// Construct a ranker from explicit weights and policy.
    #[must_use]
    pub const fn new(weights: ScoreWeights, policy: RankingPolicy) -> Self {
        Self { weights, policy }
    }

    /// Qualify and score every definition, best first.
    ///
    /// The sort is stable, so equal scores keep catalog order.
    #[must_use]
    pub fn rank<'c>(&self, context: &UserContext, catalog: &'c Catalog) -> Vec<ScoredCandidate<'c>> {
        let mut ranked: Vec<ScoredCandidate<'c>> = catalog
            .iter()
            .filter_map(|definition| {
                let scored = self.weights.score(definition, context.tags());
                trace!(
                    "community {} qualifies: {} (score {})",
                    definition.key(),
                    scored.is_some(),
                    scored.as_ref().map_or(0, |candidate| candidate.score)
                );
                scored
            })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Extract `profile` and assign communities from `catalog`.
    ///
    /// A `max_total` of zero is treated as one.
    #[must_use]
    pub fn assign(
        &self,
        profile: &Profile,
        catalog: &Catalog,
        max_total: usize,
    ) -> Vec<AssignedCommunity> {
        self.assign_context(&UserContext::extract(profile), catalog, max_total)
    }

    /// Assign communities for an already extracted context.
    #[must_use]
    pub fn assign_context(
        &self,
        context: &UserContext,
        catalog: &Catalog,
        max_total: usize,
    ) -> Vec<AssignedCommunity> {
        let limit = max_total.max(1);
        let ranked = self.rank(context, catalog);
        debug!(
            "{} of {} communities qualify for {} tags",
            ranked.len(),
            catalog.len(),
            context.tags().len()
        );
        let picks = tiers::bucket(&ranked, self.policy, limit);
        if picks.is_empty() {
            debug!("no community qualifies; returning placeholder");
            return vec![AssignedCommunity::placeholder()];
        }
        picks
            .into_iter()
            .map(|pick| {
                let definition = pick.candidate.definition;
                AssignedCommunity {
                    key: definition.key().to_owned(),
                    name: definition.name().to_owned(),
                    score: pick.candidate.score,
                    descriptors: descriptor::describe(
                        definition,
                        context,
                        self.policy.max_descriptors,
                    ),
                    tone: definition.tone(),
                    section: pick.section,
                }
            })
            .collect()
    }
}

/// Assign communities with the default weights and policy.
#[must_use]
pub fn assign(profile: &Profile, catalog: &Catalog, max_total: usize) -> Vec<AssignedCommunity> {
    Ranker::default().assign(profile, catalog, max_total)
}
