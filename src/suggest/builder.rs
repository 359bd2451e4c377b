//! Collection builder
//!
//! Decodes a raw suggestion data blob, validates every record, and builds
//! the immutable per-collection keyword index. Building is all-or-nothing:
//! any parse or validation failure aborts without producing a collection.

use std::collections::HashMap;

use tracing::debug;

use super::index::{normalize, KeywordIndex};
use super::record::{RawRecord, SuggestionRecord};
use crate::error::{SuggestError, ValidationError};

/// Immutable, named snapshot of one suggestion data file.
///
/// Created only by [`build`]; never mutated afterwards, so it can be
/// shared freely across query threads.
#[derive(Debug)]
pub struct Collection {
    name: String,
    records: Vec<SuggestionRecord>,
    index: KeywordIndex,
}

impl Collection {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records in source-file order.
    pub fn records(&self) -> &[SuggestionRecord] {
        &self.records
    }

    pub(crate) fn index(&self) -> &KeywordIndex {
        &self.index
    }

    /// Size counters for diagnostics.
    pub fn stats(&self) -> HashMap<String, usize> {
        let mut stats = HashMap::new();
        stats.insert("records_count".to_string(), self.records.len());
        stats.insert("keyword_entries_count".to_string(), self.index.len());
        stats.insert(
            "distinct_keywords_count".to_string(),
            self.index.distinct_keywords(),
        );
        stats
    }
}

/// Build a collection from raw JSON bytes.
///
/// The input must decode to an array of suggestion objects. Validation
/// enforces non-empty display fields, at least one usable keyword per
/// record, and block_id uniqueness across the file.
pub fn build(name: &str, bytes: &[u8]) -> Result<Collection, SuggestError> {
    let raw_records: Vec<RawRecord> = serde_json::from_slice(bytes)?;

    let mut records = Vec::with_capacity(raw_records.len());
    let mut seen_block_ids: HashMap<i32, usize> = HashMap::new();

    for (index, raw) in raw_records.into_iter().enumerate() {
        let record = validate_record(index, raw)?;

        if let Some(&first) = seen_block_ids.get(&record.block_id) {
            return Err(ValidationError::DuplicateBlockId {
                block_id: record.block_id,
                first,
                second: index,
            }
            .into());
        }
        seen_block_ids.insert(record.block_id, index);
        records.push(record);
    }

    // Index over the union of every record's normalized keywords
    let mut pairs = Vec::new();
    for (index, record) in records.iter().enumerate() {
        for keyword in &record.keywords {
            pairs.push((normalize(keyword), index as u32));
        }
    }
    let index = KeywordIndex::build(pairs);

    debug!(
        collection = name,
        records = records.len(),
        keyword_entries = index.len(),
        "built collection"
    );

    Ok(Collection {
        name: name.to_string(),
        records,
        index,
    })
}

/// Coerce one raw record into a validated [`SuggestionRecord`].
fn validate_record(index: usize, raw: RawRecord) -> Result<SuggestionRecord, ValidationError> {
    require_non_empty(index, "title", &raw.title)?;
    require_non_empty(index, "advertiser", &raw.advertiser)?;
    require_non_empty(index, "url", &raw.url)?;
    require_non_empty(index, "full_keyword", &raw.full_keyword)?;

    let keywords = match raw.keywords {
        Some(keywords) => {
            if keywords.is_empty() {
                return Err(ValidationError::EmptyKeywords { index });
            }
            keywords
        }
        None => vec![raw.full_keyword.clone()],
    };

    // A keyword that normalizes to nothing can never match; reject the
    // file rather than index it silently.
    for keyword in &keywords {
        if normalize(keyword).is_empty() {
            return Err(ValidationError::EmptyField {
                index,
                field: "keywords",
            });
        }
    }

    Ok(SuggestionRecord {
        title: raw.title,
        advertiser: raw.advertiser,
        url: raw.url,
        full_keyword: raw.full_keyword,
        keywords,
        block_id: raw.block_id,
        iab_category: raw.iab_category,
    })
}

fn require_non_empty(
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { index, field });
    }
    Ok(())
}
