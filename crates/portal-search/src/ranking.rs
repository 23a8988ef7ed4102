use crate::normalization::normalize_query;
use crate::scoring::entry_score;
use crate::types::{RankedEntry, SearchEntry};

/// Rank entries against a query: per-field scores are summed per entry,
/// zero-score entries are excluded, and the rest sort by descending total.
/// Ties keep input order (stable sort). An empty or whitespace-only query
/// returns every entry in input order with score 0 and no highlight.
pub fn rank_entries(entries: &[SearchEntry], query: &str) -> Vec<RankedEntry> {
    if normalize_query(query).is_empty() {
        return entries
            .iter()
            .map(|e| RankedEntry {
                entry: e.clone(),
                score: 0,
                highlight: None,
            })
            .collect();
    }

    let mut ranked: Vec<RankedEntry> = entries
        .iter()
        .filter_map(|e| {
            let (score, highlight) = entry_score(e, query);
            if score == 0 {
                return None;
            }
            Some(RankedEntry {
                entry: e.clone(),
                score,
                highlight,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
