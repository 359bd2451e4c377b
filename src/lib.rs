//! amp-suggest: in-memory keyword-suggestion index manager
//!
//! Ingests a JSON data file of sponsored "AMP"-style URL suggestions for a
//! named locale/platform variant (e.g. "us-desktop"), builds a prefix-
//! searchable in-memory index, and answers queries against typed user
//! input with ranked suggestion records.
//!
//! ```no_run
//! use amp_suggest::SuggestionManager;
//!
//! # fn main() -> Result<(), amp_suggest::SuggestError> {
//! let manager = SuggestionManager::new();
//! manager.build_from_file("us-desktop", "data/amp-us-desktop.json")?;
//! for suggestion in manager.query("us-desktop", "am")? {
//!     println!("{} -> {}", suggestion.title, suggestion.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod suggest;

pub use error::{SuggestError, ValidationError};
pub use suggest::{Collection, CollectionStore, RecordView, SuggestionManager, SuggestionRecord};
