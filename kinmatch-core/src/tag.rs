//! Canonical tags and the tokenizer that produces them.
//!
//! Every string that takes part in matching, whether a user's onboarding
//! answer or a catalog author's tag list, goes through [`Tag::parse`], so the
//! two sides always compare like with like.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// A canonical, lowercase, underscore-joined token such as `late_20s`.
///
/// Tags are never empty and only contain `[a-z0-9_]`.
///
/// # Examples
/// ```
/// use kinmatch_core::Tag;
///
/// let tag = Tag::parse("Late 20's").expect("non-empty token");
/// assert_eq!(tag.as_str(), "late_20s");
/// assert!(Tag::parse("  !! ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Tokenize `raw` into a tag, returning `None` when nothing survives.
    ///
    /// The input is trimmed and lower-cased, apostrophes are stripped, `&`
    /// becomes `and`, each whitespace run collapses to a single `_`, and any
    /// remaining character outside `[a-z0-9_]` is dropped.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let token = tokenize(raw);
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Borrow the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the tag for people by replacing underscores with spaces.
    ///
    /// # Examples
    /// ```
    /// use kinmatch_core::Tag;
    ///
    /// let tag = Tag::parse("mobility_or_joint_issues").expect("valid tag");
    /// assert_eq!(tag.prettify(), "mobility or joint issues");
    /// ```
    #[must_use]
    pub fn prettify(&self) -> String {
        self.0.replace('_', " ")
    }
}

fn tokenize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut token = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for ch in lowered.chars() {
        // Apostrophes vanish before whitespace is collapsed.
        if matches!(ch, '\'' | '\u{2019}') {
            continue;
        }
        if ch.is_whitespace() {
            if !in_whitespace {
                token.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        match ch {
            '&' => token.push_str("and"),
            c if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' => token.push(c),
            _ => {}
        }
    }
    token
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("NYC", "nyc")]
    #[case("  Late 20s ", "late_20s")]
    #[case("Mom's group", "moms_group")]
    #[case("Mom\u{2019}s group", "moms_group")]
    #[case("Arts & Crafts", "arts_and_crafts")]
    #[case("new   york\tcity", "new_york_city")]
    #[case("0-1 year", "01_year")]
    #[case("café", "caf")]
    #[case("a ' b", "a_b")]
    #[case("already_canonical", "already_canonical")]
    fn tokenizes_answers(#[case] raw: &str, #[case] expected: &str) {
        let tag = Tag::parse(raw).expect("token should survive");
        assert_eq!(tag.as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("!!!")]
    #[case("''")]
    fn rejects_inputs_that_tokenize_to_nothing(#[case] raw: &str) {
        assert!(Tag::parse(raw).is_none());
    }

    #[rstest]
    fn prettify_replaces_underscores() {
        let tag = Tag::parse("chronic_illness").expect("valid tag");
        assert_eq!(tag.prettify(), "chronic illness");
    }

    #[rstest]
    fn display_matches_as_str() {
        let tag = Tag::parse("Queens").expect("valid tag");
        assert_eq!(tag.to_string(), tag.as_str());
    }
}
