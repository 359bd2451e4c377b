//! Query resolution and ranking
//!
//! Resolves normalized typed input against a collection's keyword index,
//! dedupes records that match on several keywords, and orders results by
//! relevance: longer matched keywords first (closer to a full phrase),
//! source order as the deterministic tie-break.

use std::collections::HashMap;

use super::builder::Collection;
use super::index::normalize;
use super::record::RecordView;

/// Resolve `input` against `collection`.
///
/// A record matches when any of its keywords has the normalized input as
/// a prefix; it appears at most once in the result, ranked by its longest
/// matching keyword. Empty or whitespace-only input yields no results.
/// Pure read over the immutable collection.
pub fn query(collection: &Collection, input: &str) -> Vec<RecordView> {
    let needle = normalize(input);
    if needle.is_empty() {
        return Vec::new();
    }

    // record index -> longest matched keyword length, in chars
    let mut best_match: HashMap<u32, usize> = HashMap::new();
    for (keyword, record_index) in collection.index().prefix_matches(&needle) {
        let length = keyword.chars().count();
        let entry = best_match.entry(record_index).or_insert(0);
        if length > *entry {
            *entry = length;
        }
    }

    let mut ranked: Vec<(usize, u32)> = best_match
        .into_iter()
        .map(|(record_index, length)| (length, record_index))
        .collect();
    // Keyword length descending, then source order ascending
    ranked.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    ranked
        .into_iter()
        .map(|(_, record_index)| collection.records()[record_index as usize].view())
        .collect()
}
