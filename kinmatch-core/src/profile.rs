//! Raw onboarding answers keyed by field name.
//!
//! A [`Profile`] is whatever the onboarding screens saved: free text, single
//! selections and multi-select lists. Values the engine cannot read are kept
//! as [`FieldValue::Unsupported`] and simply contribute nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One onboarding answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FieldValue {
    /// A single free-text or single-select answer.
    Text(String),
    /// A multi-select answer.
    List(Vec<String>),
    /// A value of a shape the engine does not read (null, boolean, object).
    Unsupported,
}

impl FieldValue {
    /// Build a list value from any iterable of strings.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Report whether the value counts as answered.
    ///
    /// Empty text is treated as unanswered; a list counts even when empty.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::List(_) => true,
            Self::Unsupported => false,
        }
    }

    /// Flatten the value into trimmed, non-empty strings.
    #[must_use]
    pub fn strings(&self) -> Vec<String> {
        match self {
            Self::Text(text) => trimmed(std::iter::once(text)),
            Self::List(items) => trimmed(items.iter()),
            Self::Unsupported => Vec::new(),
        }
    }
}

fn trimmed<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    items
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(items.into_iter().filter_map(scalar_text).collect()),
            other => scalar_text(other).map_or(Self::Unsupported, Self::Text),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(text) => Self::String(text),
            FieldValue::List(items) => Self::Array(items.into_iter().map(Self::String).collect()),
            FieldValue::Unsupported => Self::Null,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// A user's saved onboarding answers.
///
/// # Examples
/// ```
/// use kinmatch_core::{FieldValue, Profile};
///
/// let profile = Profile::new()
///     .with_field("city", "Brooklyn")
///     .with_field("conditions", FieldValue::list(["Anxiety", "Chronic illness"]));
/// assert!(profile.get("city").is_some());
/// assert!(profile.get("identity").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    fields: BTreeMap<String, FieldValue>,
}

impl Profile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Insert a field while returning `self` for chaining.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a field by its exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Return the first answered field among `keys`.
    ///
    /// Keys are consulted in order; an absent key or an unanswered value
    /// (see [`FieldValue::is_present`]) defers to the next one.
    #[must_use]
    pub fn first_present(&self, keys: &[&str]) -> Option<&FieldValue> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| value.is_present())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#""Brooklyn""#, FieldValue::Text("Brooklyn".into()))]
    #[case("42", FieldValue::Text("42".into()))]
    #[case(r#"["a", 7, null, true]"#, FieldValue::List(vec!["a".into(), "7".into()]))]
    #[case("null", FieldValue::Unsupported)]
    #[case("false", FieldValue::Unsupported)]
    #[case(r#"{"nested": "x"}"#, FieldValue::Unsupported)]
    fn decodes_json_values(#[case] json: &str, #[case] expected: FieldValue) {
        let value: FieldValue = serde_json::from_str(json).expect("valid json");
        assert_eq!(value, expected);
    }

    #[rstest]
    fn strings_trims_and_drops_blanks() {
        let value = FieldValue::list(["  Queens ", "", "   ", "Late 20s"]);
        assert_eq!(value.strings(), vec!["Queens".to_owned(), "Late 20s".to_owned()]);
    }

    #[rstest]
    fn first_present_skips_empty_text() {
        let profile = Profile::new()
            .with_field("city", "")
            .with_field("location", "Manhattan");
        let value = profile
            .first_present(&["city", "location"])
            .expect("location should be used");
        assert_eq!(value, &FieldValue::Text("Manhattan".into()));
    }

    #[rstest]
    fn first_present_accepts_empty_lists() {
        let profile = Profile::new()
            .with_field("life_stage", FieldValue::list(Vec::<String>::new()))
            .with_field("lifeStages", FieldValue::list(["Retired"]));
        let value = profile
            .first_present(&["life_stage", "lifeStages"])
            .expect("empty list still counts");
        assert!(value.strings().is_empty());
    }

    #[rstest]
    fn profile_round_trips_through_json() {
        let json = r#"{"age_range":"Late 20s","identities":["Jewish"]}"#;
        let profile: Profile = serde_json::from_str(json).expect("valid profile");
        assert_eq!(
            profile.get("identities"),
            Some(&FieldValue::list(["Jewish"]))
        );
        let encoded = serde_json::to_string(&profile).expect("serialise profile");
        assert_eq!(encoded, json);
    }
}
