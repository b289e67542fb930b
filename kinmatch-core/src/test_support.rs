//! Small builders shared by unit, behaviour and downstream tests.

use crate::{CommunityDefinition, FieldValue, Profile, Tone};

/// Build a neutral-toned definition named after its key.
///
/// # Panics
/// Panics when `key` is blank or `requires` tokenizes to nothing.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "test builder; invalid fixtures should fail loudly"
)]
pub fn definition(key: &str, requires: &[&str], boosts: &[&str]) -> CommunityDefinition {
    CommunityDefinition::new(key, key, requires, boosts, Tone::Neutral)
        .expect("test definition must be valid")
}

/// Build a profile whose fields are all multi-select lists.
///
/// # Examples
/// ```
/// use kinmatch_core::{extract, test_support::profile_with};
///
/// let profile = profile_with(&[("city", &["Brooklyn"]), ("age_range", &["Late 20s"])]);
/// assert!(extract(&profile).has_tag("nyc"));
/// ```
#[must_use]
pub fn profile_with(fields: &[(&str, &[&str])]) -> Profile {
    fields
        .iter()
        .fold(Profile::new(), |profile, &(key, values)| {
            profile.with_field(key, FieldValue::list(values.iter().copied()))
        })
}
