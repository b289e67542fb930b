//! Partition ranked candidates into presentation tiers.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::{RankingPolicy, ScoredCandidate, Section, Tag};

/// A candidate picked for output and the tier it lands in.
#[derive(Debug, Clone, Copy)]
pub(super) struct Pick<'r, 'c> {
    pub(super) section: Section,
    pub(super) candidate: &'r ScoredCandidate<'c>,
}

/// Bucket `ranked` (best first) into Primary, Also Relevant and Keeps
/// Coming Up, capped at `max_total`.
///
/// Returns an empty list only when `ranked` is empty.
pub(super) fn bucket<'r, 'c>(
    ranked: &'r [ScoredCandidate<'c>],
    policy: RankingPolicy,
    max_total: usize,
) -> Vec<Pick<'r, 'c>> {
    let Some((primary, rest)) = ranked.split_first() else {
        return Vec::new();
    };
    let capacity = policy.also_relevant_capacity(max_total);
    let also = if policy.prefer_distinct_requires {
        also_relevant(primary, rest, capacity)
    } else {
        rest.iter().enumerate().take(capacity).collect()
    };

    let mut picks = Vec::with_capacity(also.len().saturating_add(2));
    picks.push(Pick {
        section: Section::Primary,
        candidate: primary,
    });
    picks.extend(also.iter().map(|&(_, candidate)| Pick {
        section: Section::AlsoRelevant,
        candidate,
    }));

    if picks.len() < max_total
        && let Some(candidate) = keeps_coming_up(primary, rest, &also, policy)
    {
        picks.push(Pick {
            section: Section::KeepsComingUp,
            candidate,
        });
    }
    picks.truncate(max_total);
    picks
}

fn is_distinct(candidate: &ScoredCandidate<'_>, primary: &ScoredCandidate<'_>) -> bool {
    let primary_requires = primary.definition.requires();
    !candidate
        .definition
        .requires()
        .iter()
        .all(|tag| primary_requires.contains(tag))
}

/// Pick up to `limit` runners-up, preferring those whose required tags are
/// not a subset of the primary's, then backfilling from the rest. The
/// result keeps rank order.
fn also_relevant<'r, 'c>(
    primary: &ScoredCandidate<'c>,
    rest: &'r [ScoredCandidate<'c>],
    limit: usize,
) -> Vec<(usize, &'r ScoredCandidate<'c>)> {
    let mut chosen: Vec<(usize, &ScoredCandidate<'c>)> = rest
        .iter()
        .enumerate()
        .filter(|(_, candidate)| is_distinct(candidate, primary))
        .take(limit)
        .collect();
    let shortfall = limit.saturating_sub(chosen.len());
    chosen.extend(
        rest.iter()
            .enumerate()
            .filter(|(_, candidate)| !is_distinct(candidate, primary))
            .take(shortfall),
    );
    chosen.sort_by_key(|&(rank, _)| rank);
    chosen
}

/// Pick the credible candidate that adds the most breadth: lowest overlap
/// with the tags already shown, then highest score, then best rank.
fn keeps_coming_up<'r, 'c>(
    primary: &ScoredCandidate<'c>,
    rest: &'r [ScoredCandidate<'c>],
    also: &[(usize, &'r ScoredCandidate<'c>)],
    policy: RankingPolicy,
) -> Option<&'r ScoredCandidate<'c>> {
    let covered: BTreeSet<&Tag> = primary
        .definition
        .requires()
        .iter()
        .chain(
            also.iter()
                .flat_map(|(_, candidate)| candidate.definition.requires()),
        )
        .collect();

    rest.iter()
        .enumerate()
        .filter(|(rank, _)| !also.iter().any(|(taken, _)| taken == rank))
        .filter(|(_, candidate)| policy.passes_floor(candidate.score, primary.score))
        .min_by_key(|&(rank, candidate)| {
            let overlap = candidate
                .definition
                .requires()
                .iter()
                .filter(|tag| covered.contains(tag))
                .count();
            (overlap, Reverse(candidate.score), rank)
        })
        .map(|(_, candidate)| candidate)
}
