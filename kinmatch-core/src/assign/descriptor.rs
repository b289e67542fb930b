//! Descriptor lookup for assigned communities.

use crate::{CommunityDefinition, UserContext};

/// Collect up to `limit` descriptors for `definition`.
///
/// Matched tags are visited in definition order. Each renders as the user's
/// own phrase when one tokenizes to exactly that tag, otherwise as the
/// de-underscored tag.
pub(super) fn describe(
    definition: &CommunityDefinition,
    context: &UserContext,
    limit: usize,
) -> Vec<String> {
    definition
        .tags()
        .filter(|tag| context.tags().contains(*tag))
        .take(limit)
        .map(|tag| {
            context
                .original_phrase(tag)
                .map_or_else(|| tag.prettify(), str::to_owned)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldValue, Profile, Tone};
    use rstest::rstest;

    #[rstest]
    fn prefers_original_phrases_and_caps_the_list() {
        let definition = CommunityDefinition::new(
            "k",
            "Name",
            ["nyc", "late_20s"],
            ["anxiety", "working_full_time"],
            Tone::Neutral,
        )
        .expect("valid definition");
        let profile = Profile::new()
            .with_field("city", "NYC")
            .with_field("age_range", "Late 20s")
            .with_field("conditions", FieldValue::list(["Anxiety"]))
            .with_field("life_stage", FieldValue::list(["Working"]));
        let context = UserContext::extract(&profile);

        assert_eq!(
            describe(&definition, &context, 3),
            ["NYC", "Late 20s", "Anxiety"]
        );
        assert_eq!(describe(&definition, &context, 1), ["NYC"]);
    }

    #[rstest]
    fn alias_tags_fall_back_to_prettified_names() {
        let definition = CommunityDefinition::new(
            "k",
            "Name",
            ["vintage"],
            ["mobility_or_joint_issues"],
            Tone::Light,
        )
        .expect("valid definition");
        let profile = Profile::new()
            .with_field("life_stage", FieldValue::list(["Retired"]))
            .with_field("conditions", FieldValue::list(["Joint pain"]));
        let context = UserContext::extract(&profile);

        assert_eq!(
            describe(&definition, &context, 3),
            ["vintage", "mobility or joint issues"]
        );
    }
}
