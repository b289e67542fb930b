//! End-to-end checks of profile extraction, qualification and assignment.

use kinmatch_core::test_support::{definition, profile_with};
use kinmatch_core::{
    AssignedCommunity, Catalog, CommunityDefinition, Profile, Ranker, RankingPolicy,
    ScoreWeights, Section, Tone, assign, extract, qualify,
};
use rstest::{fixture, rstest};

#[fixture]
fn quarter_life() -> Catalog {
    Catalog::new(vec![definition("a", &["nyc", "late_20s"], &["anxiety"])])
        .expect("valid catalog")
}

#[rstest]
#[case::exact_qualification(
    &[("city", &["NYC"][..]), ("age_range", &["Late 20s"][..])][..],
    180
)]
#[case::boost_increments(
    &[
        ("city", &["NYC"][..]),
        ("age_range", &["Late 20s"][..]),
        ("conditions", &["Anxiety"][..]),
    ][..],
    192
)]
fn qualifying_profiles_land_in_primary(
    quarter_life: Catalog,
    #[case] fields: &[(&str, &[&str])],
    #[case] score: u32,
) {
    let assigned = assign(&profile_with(fields), &quarter_life, 5);
    let [entry] = assigned.as_slice() else {
        panic!("expected a single entry, got {assigned:?}");
    };
    assert_eq!(entry.key, "a");
    assert_eq!(entry.score, score);
    assert_eq!(entry.section, Section::Primary);
}

#[rstest]
fn missing_required_tag_falls_back(quarter_life: Catalog) {
    let profile = profile_with(&[("city", &["NYC"]), ("conditions", &["Anxiety"])]);
    let community = quarter_life.get("a").expect("community a");
    let outcome = qualify(community, extract(&profile).tags());
    assert!(!outcome.qualifies);
    assert_eq!(outcome.score, 0);
    assert_eq!(
        assign(&profile, &quarter_life, 5),
        vec![AssignedCommunity::placeholder()]
    );
}

#[rstest]
fn unrecognised_answers_fall_back(quarter_life: Catalog) {
    let profile = profile_with(&[("identities", &["Astronaut"])]);
    let assigned = assign(&profile, &quarter_life, 5);
    let [entry] = assigned.as_slice() else {
        panic!("expected a single entry, got {assigned:?}");
    };
    assert!(entry.is_placeholder());
    assert_eq!(entry.name, "Your Starting Point");
    assert_eq!(entry.score, 1);
    assert!(entry.descriptors.is_empty());
    assert_eq!(entry.tone, Tone::Neutral);
    assert_eq!(entry.section, Section::Primary);
}

#[rstest]
fn alias_only_tags_render_de_underscored() {
    let catalog = Catalog::new(vec![
        CommunityDefinition::new(
            "gents_and_joints",
            "Gents & Joints",
            ["male", "mobility_or_joint_issues"],
            ["arthritis"],
            Tone::Light,
        )
        .expect("valid definition"),
    ])
    .expect("valid catalog");
    let profile = profile_with(&[
        ("identities", &["Male"]),
        ("conditions", &["Bad knee joint", "Arthritis"]),
    ]);
    let assigned = assign(&profile, &catalog, 5);
    let entry = assigned.first().expect("one entry");
    assert_eq!(
        entry.descriptors,
        ["Male", "mobility or joint issues", "Arthritis"]
    );
    assert_eq!(entry.score, 192);
    assert_eq!(entry.tone, Tone::Light);
}

#[rstest]
fn near_duplicates_are_backfilled_only_when_needed() {
    let catalog = Catalog::new(vec![
        definition("broad", &["nyc", "late_20s"], &[]),
        definition("narrow", &["nyc"], &[]),
        definition("other", &["anxiety"], &[]),
    ])
    .expect("valid catalog");
    let profile = profile_with(&[
        ("city", &["NYC"]),
        ("age_range", &["Late 20s"]),
        ("conditions", &["Anxiety"]),
    ]);

    let with_room = assign(&profile, &catalog, 5);
    let sections: Vec<(&str, Section)> = with_room
        .iter()
        .map(|entry| (entry.key.as_str(), entry.section))
        .collect();
    assert_eq!(
        sections,
        [
            ("broad", Section::Primary),
            ("narrow", Section::AlsoRelevant),
            ("other", Section::AlsoRelevant),
        ]
    );

    let tight = assign(&profile, &catalog, 3);
    let keys: Vec<&str> = tight.iter().map(|entry| entry.key.as_str()).collect();
    assert_eq!(keys, ["broad", "other", "narrow"]);
    assert_eq!(
        tight.last().map(|entry| entry.section),
        Some(Section::KeepsComingUp)
    );
}

#[rstest]
fn custom_policy_changes_tier_sizes() {
    let catalog = Catalog::new(vec![
        definition("one", &["nyc"], &["anxiety"]),
        definition("two", &["anxiety"], &[]),
        definition("three", &["late_20s"], &[]),
    ])
    .expect("valid catalog");
    let profile = profile_with(&[
        ("city", &["NYC"]),
        ("age_range", &["Late 20s"]),
        ("conditions", &["Anxiety"]),
    ]);
    let ranker = Ranker::new(
        ScoreWeights::default(),
        RankingPolicy {
            also_relevant_limit: 0,
            breadth_floor_percent: 100,
            ..RankingPolicy::default()
        },
    );
    let assigned = ranker.assign(&profile, &catalog, 5);
    let keys: Vec<&str> = assigned.iter().map(|entry| entry.key.as_str()).collect();
    assert_eq!(keys, ["one"]);
}

#[rstest]
#[case::distinct_first(true, ["both", "other", "sub"])]
#[case::rank_only(false, ["both", "sub", "other"])]
fn distinct_preference_can_be_disabled(#[case] prefer: bool, #[case] expected: [&str; 3]) {
    let catalog = Catalog::new(vec![
        definition("both", &["anxiety", "insomnia"], &[]),
        definition("sub", &["anxiety"], &["migraine"]),
        definition("other", &["migraine"], &[]),
    ])
    .expect("valid catalog");
    let profile = profile_with(&[("conditions", &["Anxiety", "Insomnia", "Migraine"])]);
    let ranker = Ranker::new(
        ScoreWeights::default(),
        RankingPolicy {
            prefer_distinct_requires: prefer,
            ..RankingPolicy::default()
        },
    );

    let assigned = ranker.assign(&profile, &catalog, 3);
    let keys: Vec<&str> = assigned.iter().map(|entry| entry.key.as_str()).collect();
    assert_eq!(keys, expected);
    let sections: Vec<Section> = assigned.iter().map(|entry| entry.section).collect();
    assert_eq!(
        sections,
        [Section::Primary, Section::AlsoRelevant, Section::KeepsComingUp]
    );
}

#[rstest]
fn json_output_uses_display_labels(quarter_life: Catalog) {
    let profile: Profile =
        serde_json::from_str(r#"{"city": "Brooklyn", "ageRange": "late 20s"}"#)
            .expect("valid profile");
    let assigned = assign(&profile, &quarter_life, 5);
    let json = serde_json::to_value(&assigned).expect("serialise output");
    assert_eq!(
        json,
        serde_json::json!([{
            "key": "a",
            "name": "a",
            "score": 180,
            "descriptors": ["nyc", "late 20s"],
            "tone": "neutral",
            "section": "Primary"
        }])
    );
}
