use crate::highlight::highlight_occurrences;
use crate::normalization::normalize_query;
use crate::types::{FieldKind, ScoredMatch, SearchEntry};

/// Query tokens shorter than this are discarded before overlap matching.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Score one field of an entry against a query.
///
/// A substring match short-circuits: it scores the field kind's full weight
/// and highlights every occurrence, and the token path is never evaluated.
/// Otherwise query tokens of at least [`MIN_TOKEN_CHARS`] characters are
/// tested for containment, scoring `matched * token_weight / kept` in
/// integer arithmetic with no highlight. Empty query or text scores nothing.
pub fn score_field(query: &str, text: &str, kind: FieldKind) -> Option<ScoredMatch> {
    let query_norm = normalize_query(query);
    if query_norm.is_empty() || text.is_empty() {
        return None;
    }
    let text_folded = text.to_lowercase();

    if text_folded.contains(&query_norm) {
        return Some(ScoredMatch {
            score: kind.substring_weight(),
            highlighted: Some(highlight_occurrences(text, &query_norm)),
        });
    }

    let tokens: Vec<&str> = query_norm
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .collect();
    if tokens.is_empty() {
        return None;
    }
    let matched = tokens.iter().filter(|t| text_folded.contains(*t)).count() as u32;
    if matched == 0 {
        return None;
    }
    Some(ScoredMatch {
        score: matched * kind.token_weight() / tokens.len() as u32,
        highlighted: None,
    })
}

/// Boolean-only variant: substring containment, plus the token-overlap check
/// (any kept token contained) for queries longer than 3 characters.
pub fn fuzzy_contains(query: &str, text: &str) -> bool {
    let query_norm = normalize_query(query);
    if query_norm.is_empty() || text.is_empty() {
        return false;
    }
    let text_folded = text.to_lowercase();
    if text_folded.contains(&query_norm) {
        return true;
    }
    if query_norm.chars().count() <= 3 {
        return false;
    }
    query_norm
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .any(|t| text_folded.contains(t))
}

/// Total relevance of an entry: sum of the per-field scores over title,
/// description, and author. Also reports the highlighted rendering of the
/// best-scoring field, if any field had a substring match.
pub fn entry_score(entry: &SearchEntry, query: &str) -> (u32, Option<String>) {
    let fields = [
        (entry.title.as_deref(), FieldKind::Title),
        (entry.description.as_deref(), FieldKind::Other),
        (entry.author.as_deref(), FieldKind::Author),
    ];

    let mut total = 0;
    let mut best: Option<(u32, String)> = None;
    for (text, kind) in fields {
        let Some(text) = text else { continue };
        let Some(m) = score_field(query, text, kind) else {
            continue;
        };
        total += m.score;
        if let Some(rendered) = m.highlighted {
            if best.as_ref().map(|(s, _)| m.score > *s).unwrap_or(true) {
                best = Some((m.score, rendered));
            }
        }
    }
    (total, best.map(|(_, rendered)| rendered))
}
