//! Keyword index
//!
//! A sorted table of (normalized keyword, record index) pairs. All keywords
//! sharing a prefix form one contiguous run in the sorted order, so a prefix
//! lookup is a binary search for the run start followed by a linear scan.

use unicode_normalization::UnicodeNormalization;

/// Normalize text for keyword comparison: Unicode NFKC, lower-cased,
/// surrounding whitespace trimmed. Applied once per keyword at build time
/// and once per input at query time.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().trim().to_lowercase()
}

/// Prefix-searchable keyword table for one collection.
///
/// Immutable after construction; concurrent reads need no locking.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    /// Sorted by keyword, then record index. Entries are unique.
    entries: Vec<(String, u32)>,
}

impl KeywordIndex {
    /// Build the index from (normalized keyword, record index) pairs.
    ///
    /// Callers must pass already-normalized keywords. Duplicate pairs
    /// (the same keyword listed twice on one record) collapse to one entry.
    pub fn build(mut pairs: Vec<(String, u32)>) -> Self {
        pairs.sort_unstable();
        pairs.dedup();
        Self { entries: pairs }
    }

    /// All entries whose keyword starts with `prefix`, in keyword order.
    ///
    /// `prefix` must be normalized. An empty prefix matches nothing by
    /// convention; the query layer rejects it before reaching here.
    pub fn prefix_matches<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, u32)> + 'a {
        // First entry >= prefix; every keyword starting with `prefix`
        // sorts at or after it, contiguously.
        let start = self
            .entries
            .partition_point(|(keyword, _)| keyword.as_str() < prefix);

        self.entries[start..]
            .iter()
            .take_while(move |(keyword, _)| keyword.starts_with(prefix))
            .map(|(keyword, index)| (keyword.as_str(), *index))
    }

    /// Number of keyword entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keywords (entries may share a keyword across
    /// different records).
    pub fn distinct_keywords(&self) -> usize {
        let mut count = 0;
        let mut last: Option<&str> = None;
        for (keyword, _) in &self.entries {
            if last != Some(keyword.as_str()) {
                count += 1;
                last = Some(keyword.as_str());
            }
        }
        count
    }
}
