//! Collection store
//!
//! Name-keyed registry of immutable collections. The map is the only
//! mutable shared state in the engine: installs swap an `Arc` under a
//! write lock, readers clone the `Arc` under a read lock and then query
//! without any locking. A reader always observes a fully-old or
//! fully-new collection, never a torn one.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::builder::Collection;

/// Registry mapping collection name to its current snapshot.
#[derive(Debug, Default)]
pub struct CollectionStore {
    collections: RwLock<HashMap<String, Arc<Collection>>>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `collection` under its name, replacing any prior snapshot.
    /// The replaced snapshot stays alive until its last reader drops it.
    pub fn install(&self, collection: Collection) {
        let mut collections = self
            .collections
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        collections.insert(collection.name().to_string(), Arc::new(collection));
    }

    /// Current snapshot for `name`, if one was ever installed.
    pub fn get(&self, name: &str) -> Option<Arc<Collection>> {
        let collections = self
            .collections
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        collections.get(name).cloned()
    }

    /// Snapshot of the registered names, sorted for stable output.
    pub fn names(&self) -> Vec<String> {
        let collections = self
            .collections
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.collections
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
