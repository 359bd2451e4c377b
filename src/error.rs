//! Error types for the suggestion index manager

use thiserror::Error;

/// Top-level error for build and query operations.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("failed to read suggestion data: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed suggestion data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no collection named '{0}'")]
    CollectionNotFound(String),
}

/// Semantic violation in an otherwise well-formed data file.
///
/// Any of these aborts the build; no collection is installed and any
/// previously-installed collection under the same name stays queryable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("record {index}: field '{field}' must not be empty")]
    EmptyField { index: usize, field: &'static str },
    #[error("record {index}: keywords list must not be empty")]
    EmptyKeywords { index: usize },
    #[error("duplicate block_id {block_id} (records {first} and {second})")]
    DuplicateBlockId {
        block_id: i32,
        first: usize,
        second: usize,
    },
}

impl SuggestError {
    /// Stable machine-readable code, used by the CLI for exit status
    /// selection and error output.
    pub fn error_code(&self) -> &'static str {
        match self {
            SuggestError::Io(_) => "io_error",
            SuggestError::Parse(_) => "parse_error",
            SuggestError::Validation(_) => "validation_error",
            SuggestError::CollectionNotFound(_) => "collection_not_found",
        }
    }
}
