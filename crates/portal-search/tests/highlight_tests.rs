use portal_search::highlight::highlight_occurrences;

#[test]
fn wraps_single_occurrence() {
    let out = highlight_occurrences("Veteran Support Fund", "veteran");
    assert_eq!(out, "<mark>Veteran</mark> Support Fund");
}

#[test]
fn preserves_original_case() {
    let out = highlight_occurrences("VETERAN fund", "veteran");
    assert_eq!(out, "<mark>VETERAN</mark> fund");
}

#[test]
fn wraps_every_occurrence() {
    let out = highlight_occurrences("fund the Fund's fund", "fund");
    assert_eq!(
        out,
        "<mark>fund</mark> the <mark>Fund</mark>'s <mark>fund</mark>"
    );
}

#[test]
fn occurrences_do_not_overlap() {
    let out = highlight_occurrences("aaa", "aa");
    assert_eq!(out, "<mark>aa</mark>a");
}

#[test]
fn no_occurrence_leaves_text_unchanged() {
    let out = highlight_occurrences("Treasury report", "veteran");
    assert_eq!(out, "Treasury report");
}

#[test]
fn empty_needle_leaves_text_unchanged() {
    let out = highlight_occurrences("Treasury report", "");
    assert_eq!(out, "Treasury report");
}

#[test]
fn matches_accented_text_case_insensitively() {
    let out = highlight_occurrences("Caf\u{00C9} fund", "caf\u{00E9}");
    assert_eq!(out, "<mark>Caf\u{00C9}</mark> fund");
}

#[test]
fn multibyte_neighbors_survive() {
    let out = highlight_occurrences("\u{00E9}fund\u{00E9}", "fund");
    assert_eq!(out, "\u{00E9}<mark>fund</mark>\u{00E9}");
}

#[test]
fn match_at_end_of_text() {
    let out = highlight_occurrences("support fund", "fund");
    assert_eq!(out, "support <mark>fund</mark>");
}
