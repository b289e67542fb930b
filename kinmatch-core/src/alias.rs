//! Alias rules mapping colloquial answers onto canonical tags.
//!
//! Rules are data: an ordered list of [`AliasRule`] values, each pairing
//! one or more [`AliasMatcher`]s with the tags added when any of them fires.
//! Expansion only ever adds tags. The table is deliberately conservative; a
//! user who is not tagged is preferable to one shown an irrelevant, possibly
//! sensitive community.

use crate::Tag;

/// How an alias rule recognizes a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasMatcher {
    /// The token contains the given substring.
    Contains(&'static str),
    /// The token equals the given string.
    Exact(&'static str),
}

impl AliasMatcher {
    /// Report whether `token` triggers this matcher.
    #[must_use]
    pub fn matches(self, token: &str) -> bool {
        match self {
            Self::Contains(needle) => token.contains(needle),
            Self::Exact(expected) => token == expected,
        }
    }
}

/// A single expansion rule: when any trigger matches, add every tag in
/// `adds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasRule {
    /// Matchers tested against each token; any match fires the rule.
    pub triggers: &'static [AliasMatcher],
    /// Canonical tags added alongside the original token.
    pub adds: &'static [&'static str],
}

impl AliasRule {
    /// Report whether the rule fires for `token`.
    #[must_use]
    pub fn fires_for(&self, token: &Tag) -> bool {
        self.triggers
            .iter()
            .any(|matcher| matcher.matches(token.as_str()))
    }
}

use AliasMatcher::{Contains, Exact};

/// The default onboarding alias table, evaluated in order.
pub const DEFAULT_ALIAS_RULES: &[AliasRule] = &[
    // Age and stage.
    AliasRule {
        triggers: &[Contains("late_20")],
        adds: &["late_20s"],
    },
    AliasRule {
        triggers: &[Contains("early_30")],
        adds: &["early_30s"],
    },
    // Work.
    AliasRule {
        triggers: &[Contains("full_time"), Exact("working")],
        adds: &["working_full_time"],
    },
    // Location.
    AliasRule {
        triggers: &[
            Exact("new_york_city"),
            Exact("nyc"),
            Contains("manhattan"),
            Contains("brooklyn"),
            Contains("queens"),
        ],
        adds: &["nyc"],
    },
    // Parenthood.
    AliasRule {
        triggers: &[Contains("first_time_mom"), Contains("first_time_parent")],
        adds: &["first_time_parent"],
    },
    AliasRule {
        triggers: &[Contains("year_one"), Contains("0_1")],
        adds: &["parent_year_one"],
    },
    AliasRule {
        triggers: &[Contains("post_partum"), Contains("postpartum")],
        adds: &["postpartum"],
    },
    // Health, kept broad.
    AliasRule {
        triggers: &[Contains("arthritis")],
        adds: &["arthritis"],
    },
    AliasRule {
        triggers: &[Contains("joint"), Contains("mobility")],
        adds: &["mobility_or_joint_issues"],
    },
    AliasRule {
        triggers: &[Contains("chronic_pain")],
        adds: &["chronic_pain"],
    },
    AliasRule {
        triggers: &[Contains("chronic_illness")],
        adds: &["chronic_illness"],
    },
    AliasRule {
        triggers: &[Contains("menopause")],
        adds: &["menopause"],
    },
    AliasRule {
        triggers: &[Contains("anxiety")],
        adds: &["anxiety"],
    },
    // Aging.
    AliasRule {
        triggers: &[
            Contains("older"),
            Contains("senior"),
            Contains("retired"),
            Contains("60"),
            Contains("70"),
        ],
        adds: &["vintage", "aging_body"],
    },
    // Caregiving and loss.
    AliasRule {
        triggers: &[Contains("caregiv")],
        adds: &["caregiver"],
    },
    AliasRule {
        triggers: &[Contains("widow")],
        adds: &["widowed"],
    },
    // Identity.
    AliasRule {
        triggers: &[Contains("jewish")],
        adds: &["jewish"],
    },
    AliasRule {
        triggers: &[Exact("male"), Exact("man"), Exact("guy")],
        adds: &["male"],
    },
];

/// An ordered set of alias rules applied during context extraction.
///
/// # Examples
/// ```
/// use kinmatch_core::{AliasTable, Tag};
///
/// let table = AliasTable::default();
/// let token = Tag::parse("Brooklyn Heights").expect("valid token");
/// let added: Vec<_> = table.expand(&token).map(|tag| tag.to_string()).collect();
/// assert_eq!(added, vec!["nyc".to_owned()]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasTable<'rules> {
    rules: &'rules [AliasRule],
}

impl<'rules> AliasTable<'rules> {
    /// Wrap an ordered rule list.
    #[must_use]
    pub const fn new(rules: &'rules [AliasRule]) -> Self {
        Self { rules }
    }

    /// Borrow the rules in evaluation order.
    #[must_use]
    pub const fn rules(&self) -> &'rules [AliasRule] {
        self.rules
    }

    /// Yield the tags added for `token`, in rule order.
    ///
    /// The token itself is not included. Added tags are not re-expanded.
    pub fn expand<'a>(&'a self, token: &'a Tag) -> impl Iterator<Item = Tag> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.fires_for(token))
            .flat_map(|rule| rule.adds.iter())
            .filter_map(|added| Tag::parse(added))
    }
}

impl Default for AliasTable<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_ALIAS_RULES)
    }
}
