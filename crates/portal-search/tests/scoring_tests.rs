use portal_search::scoring::{fuzzy_contains, score_field};
use portal_search::types::FieldKind;

#[test]
fn title_substring_scores_full_weight() {
    let m = score_field("veteran", "Veteran Support Fund", FieldKind::Title).unwrap();
    assert_eq!(m.score, 100);
    assert_eq!(
        m.highlighted.as_deref(),
        Some("<mark>Veteran</mark> Support Fund")
    );
}

#[test]
fn author_substring_scores_80() {
    let m = score_field("alice", "Alice Nguyen", FieldKind::Author).unwrap();
    assert_eq!(m.score, 80);
}

#[test]
fn other_substring_scores_60() {
    let m = score_field("fund", "Emergency relief fund", FieldKind::Other).unwrap();
    assert_eq!(m.score, 60);
}

#[test]
fn substring_match_is_case_insensitive() {
    let m = score_field("VETERAN", "veteran housing", FieldKind::Title).unwrap();
    assert_eq!(m.score, 100);
    assert_eq!(m.highlighted.as_deref(), Some("<mark>veteran</mark> housing"));
}

#[test]
fn query_is_trimmed_before_matching() {
    let m = score_field("  veteran  ", "Veteran Support Fund", FieldKind::Title).unwrap();
    assert_eq!(m.score, 100);
}

#[test]
fn substring_highlights_every_occurrence() {
    let m = score_field("fund", "Refund the fund", FieldKind::Other).unwrap();
    assert_eq!(
        m.highlighted.as_deref(),
        Some("Re<mark>fund</mark> the <mark>fund</mark>")
    );
}

#[test]
fn token_overlap_scores_fraction_of_weight() {
    // Three kept tokens; "vet" (prefix of "veteran") and "fund" are
    // contained, "xyz" is not: 2 * 30 / 3 = 20.
    let m = score_field("vet fund xyz", "Veteran Support Fund", FieldKind::Other).unwrap();
    assert_eq!(m.score, 20);
    assert!(m.score > 0 && m.score < 60);
    assert!(m.highlighted.is_none());
}

#[test]
fn token_overlap_title_weight() {
    // 1 of 2 kept tokens: 1 * 50 / 2 = 25.
    let m = score_field("housing xyz", "Veteran housing grants", FieldKind::Title).unwrap();
    assert_eq!(m.score, 25);
}

#[test]
fn tokens_shorter_than_three_chars_are_discarded() {
    assert!(score_field("go to it", "governance token", FieldKind::Title).is_none());
}

#[test]
fn no_token_match_returns_none() {
    assert!(score_field("quantum ledger", "Veteran Support Fund", FieldKind::Title).is_none());
}

#[test]
fn empty_query_returns_none() {
    assert!(score_field("", "Veteran Support Fund", FieldKind::Title).is_none());
    assert!(score_field("   ", "Veteran Support Fund", FieldKind::Title).is_none());
}

#[test]
fn empty_text_returns_none() {
    assert!(score_field("veteran", "", FieldKind::Title).is_none());
}

#[test]
fn substring_short_circuit_skips_token_path() {
    // "fund" appears as a substring, so the field scores the full substring
    // weight even though a blended token score would differ.
    let m = score_field("fund", "Veteran Support Fund", FieldKind::Title).unwrap();
    assert_eq!(m.score, 100);
    assert!(m.highlighted.is_some());
}

#[test]
fn fuzzy_contains_substring() {
    assert!(fuzzy_contains("veteran", "Veteran Support Fund"));
    assert!(fuzzy_contains("SUPPORT", "Veteran Support Fund"));
}

#[test]
fn fuzzy_contains_token_overlap_for_long_queries() {
    assert!(fuzzy_contains("fund xyz", "Veteran Support Fund"));
}

#[test]
fn fuzzy_contains_short_query_no_token_path() {
    // Three chars or fewer: only the whole-substring check applies.
    assert!(!fuzzy_contains("xyz", "xy yz zx"));
    assert!(fuzzy_contains("vet", "Veteran Support Fund"));
}

#[test]
fn fuzzy_contains_empty_inputs() {
    assert!(!fuzzy_contains("", "Veteran Support Fund"));
    assert!(!fuzzy_contains("veteran", ""));
}
