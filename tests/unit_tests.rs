// Unit tests for Philos Match

use philos_match::core::{
    designation::match_designation,
    input::{parse_favorites, InputError},
    normalize::normalize,
    relation::{relation_score, STRONG_RELATION, WEAK_RELATION},
    scoring::calculate_match_score,
    vibe::detect_vibe,
    Taxonomy,
};
use philos_match::models::{DesignationType, Vibe};
use serde_json::json;

fn taxonomy() -> &'static Taxonomy {
    Taxonomy::standard()
}

#[test]
fn test_normalize_trims_and_lowercases() {
    assert_eq!(normalize("  Late Night Drives "), "late night drives");
}

#[test]
fn test_relation_nature_category() {
    assert_eq!(relation_score(taxonomy(), "hiking", "camping"), STRONG_RELATION);
}

#[test]
fn test_relation_category_to_related_keyword() {
    // pottery is creative, museums is one of creative's related keywords
    assert_eq!(relation_score(taxonomy(), "pottery", "museums"), WEAK_RELATION);
    assert_eq!(relation_score(taxonomy(), "museums", "pottery"), WEAK_RELATION);
}

#[test]
fn test_relation_first_category_wins() {
    // hiking and yoga are both fitness, which is checked before nature
    assert_eq!(relation_score(taxonomy(), "hiking", "yoga"), STRONG_RELATION);
}

#[test]
fn test_relation_no_link() {
    assert_eq!(relation_score(taxonomy(), "chess", "opera"), 0);
}

#[test]
fn test_vibe_requires_two_hits() {
    assert_eq!(detect_vibe(taxonomy(), &["spreadsheets"]), None);
    assert_eq!(
        detect_vibe(taxonomy(), &["spreadsheets", "meal prep sundays"]),
        Some(Vibe::Organized)
    );
}

#[test]
fn test_scenario_shared_favorites() {
    let result = calculate_match_score(
        taxonomy(),
        &["coffee", "hiking", "yoga", "painting", "chess"],
        &["coffee", "camping", "yoga", "sculpture", "chess"],
    );

    assert_eq!(result.total_score, 90);
    assert_eq!(result.exact_matches.len(), 3);

    let designation = match_designation(result.total_score, &result.exact_matches).unwrap();
    assert_eq!(designation.kind, DesignationType::Exact);
    assert_eq!(designation.description, "You both love 'coffee'!");
}

#[test]
fn test_scenario_empty_list_is_opposites() {
    let empty: [&str; 0] = [];
    let result = calculate_match_score(taxonomy(), &empty, &["coffee"]);

    assert_eq!(result.total_score, 0);
    assert!(!result.vibe_match);
    assert_eq!(
        match_designation(result.total_score, &result.exact_matches).map(|d| d.kind),
        Some(DesignationType::Opposites)
    );
}

#[test]
fn test_scenario_pure_vibe_match_is_still_opposites() {
    let result = calculate_match_score(
        taxonomy(),
        &["solo travel", "exploring caves"],
        &["adventure films", "road trips"],
    );

    assert!(result.exact_matches.is_empty());
    assert!(result.related_matches.is_empty());
    assert!(result.vibe_match);
    assert_eq!(result.total_score, 15);
    assert_eq!(
        match_designation(result.total_score, &result.exact_matches).map(|d| d.kind),
        Some(DesignationType::Opposites)
    );
}

#[test]
fn test_scenario_night_owls() {
    let result = calculate_match_score(
        taxonomy(),
        &["3am walks", "midnight snack", "insomnia thoughts"],
        &["night owl life", "late night drives", "after hours events"],
    );

    // every cross pair shares the lateNight category
    assert!(result.exact_matches.is_empty());
    assert_eq!(result.related_matches.len(), 9);
    assert!(result.related_matches.iter().all(|m| m.score == 15));
    assert_eq!(result.user1_vibe, Some(Vibe::NightOwl));
    assert_eq!(result.user2_vibe, Some(Vibe::NightOwl));
    assert!(result.vibe_match);
    assert_eq!(result.total_score, 100);
    assert_eq!(
        match_designation(result.total_score, &result.exact_matches).map(|d| d.kind),
        Some(DesignationType::Incredible)
    );
}

#[test]
fn test_missing_favorites_treated_as_empty() {
    let favorites = parse_favorites(None).unwrap();
    let result = calculate_match_score(taxonomy(), &favorites, &["coffee".to_string()]);
    assert_eq!(result.total_score, 0);
}

#[test]
fn test_non_string_favorite_rejected() {
    let err = parse_favorites(Some(&json!(["coffee", {"name": "yoga"}]))).unwrap_err();
    assert!(matches!(err, InputError::NonStringFavorite { index: 1, .. }));
}
