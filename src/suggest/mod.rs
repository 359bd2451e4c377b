//! Keyword-suggestion indexing and querying
//!
//! This module implements the suggestion engine: record model, collection
//! builder, prefix keyword index, query/ranking logic, and the name-keyed
//! collection store behind the [`SuggestionManager`] facade.

pub mod builder;
pub mod index;
pub mod manager;
pub mod query;
pub mod record;
pub mod store;

pub use builder::Collection;
pub use index::normalize;
pub use manager::SuggestionManager;
pub use record::{RecordView, SuggestionRecord};
pub use store::CollectionStore;
