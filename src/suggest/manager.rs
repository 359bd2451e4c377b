//! Suggestion manager
//!
//! The facade callers interact with: build a named collection from a data
//! source, then query it. Coordinates the builder, the store and the query
//! engine; each manager owns its own store, so independent managers never
//! share or contaminate state.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::builder::{self, Collection};
use super::query;
use super::record::RecordView;
use super::store::CollectionStore;
use crate::error::SuggestError;

/// Keyword-suggestion index manager.
#[derive(Debug, Default)]
pub struct SuggestionManager {
    store: CollectionStore,
}

impl SuggestionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a JSON data file and install it under
    /// `name`, replacing any prior collection of that name.
    ///
    /// On any failure nothing is installed: a previously-built collection
    /// under `name` stays queryable.
    pub fn build_from_file<P: AsRef<Path>>(
        &self,
        name: &str,
        path: P,
    ) -> Result<(), SuggestError> {
        let path = path.as_ref();
        debug!(collection = name, path = %path.display(), "loading suggestion data");
        let bytes = fs::read(path)?;
        self.build_from_bytes(name, &bytes)
    }

    /// Same as [`build_from_file`](Self::build_from_file) for callers that
    /// already hold the raw blob.
    pub fn build_from_bytes(&self, name: &str, bytes: &[u8]) -> Result<(), SuggestError> {
        let collection = builder::build(name, bytes)?;
        info!(
            collection = name,
            records = collection.records().len(),
            "installed collection"
        );
        self.store.install(collection);
        Ok(())
    }

    /// Query the named collection with typed user input.
    ///
    /// Returns ranked [`RecordView`]s; an unknown name is an error, never
    /// an empty result.
    pub fn query(&self, name: &str, input: &str) -> Result<Vec<RecordView>, SuggestError> {
        let collection = self.lookup(name)?;
        Ok(query::query(&collection, input))
    }

    /// Size counters for the named collection.
    pub fn stats(&self, name: &str) -> Result<HashMap<String, usize>, SuggestError> {
        Ok(self.lookup(name)?.stats())
    }

    /// Names of the currently-installed collections, sorted.
    pub fn collection_names(&self) -> Vec<String> {
        self.store.names()
    }

    fn lookup(&self, name: &str) -> Result<Arc<Collection>, SuggestError> {
        self.store
            .get(name)
            .ok_or_else(|| SuggestError::CollectionNotFound(name.to_string()))
    }
}
