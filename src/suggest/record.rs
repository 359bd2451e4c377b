//! Suggestion record shapes
//!
//! Three representations of one sponsored suggestion: the raw deserialized
//! form mirroring the data file, the validated in-memory record, and the
//! read-only projection handed back to query callers.

use serde::{Deserialize, Serialize};

/// Raw suggestion entry as it appears in the data file.
///
/// Field presence and types are enforced by serde; semantic checks
/// (non-empty strings, unique block ids) happen in the builder.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub title: String,
    pub advertiser: String,
    pub url: String,
    pub full_keyword: String,
    /// Older exports use `id` for this field
    #[serde(alias = "id")]
    pub block_id: i32,
    /// Absent means "resolve only via the full keyword"
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub iab_category: String,
}

/// Validated suggestion record stored inside a collection.
///
/// Original casing is preserved here for display; normalized forms live
/// only in the keyword index.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRecord {
    pub title: String,
    pub advertiser: String,
    pub url: String,
    pub full_keyword: String,
    pub keywords: Vec<String>,
    pub block_id: i32,
    pub iab_category: String,
}

impl SuggestionRecord {
    /// Query-visible projection of this record.
    ///
    /// The `keywords` list is matching machinery and is deliberately
    /// not exposed to callers.
    pub fn view(&self) -> RecordView {
        RecordView {
            title: self.title.clone(),
            advertiser: self.advertiser.clone(),
            url: self.url.clone(),
            full_keyword: self.full_keyword.clone(),
            block_id: self.block_id,
            iab_category: self.iab_category.clone(),
        }
    }
}

/// Read-only suggestion returned from a query.
///
/// The field set and names are a compatibility surface: downstream
/// consumers print these exact attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordView {
    pub title: String,
    pub advertiser: String,
    pub url: String,
    pub full_keyword: String,
    pub block_id: i32,
    pub iab_category: String,
}
