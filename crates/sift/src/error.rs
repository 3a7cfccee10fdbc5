//! Error types for the sift crate.

use std::fmt;

use thiserror::Error;

/// Boxed error type used to carry host-service errors verbatim.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The store operation that failed during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    /// Counting matching records.
    Count,
    /// Retrieving matching records.
    Find,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count => write!(f, "count"),
            Self::Find => write!(f, "find"),
        }
    }
}

/// Errors that can occur when configuring or executing a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Unknown stemmer language name.
    #[error("unsupported stemmer language: {0}")]
    InvalidLanguage(String),

    /// Token-list mode was configured without any field tokenizers.
    #[error("no field tokenizers configured")]
    EmptyTokenizerMap,

    /// A field tokenizer was registered under an empty field name.
    #[error("field tokenizer registered with an empty field name")]
    EmptyFieldName,

    /// A field tokenizer targets the derived index field itself.
    #[error("field tokenizer targets the derived index field '{field}'")]
    ReservedField {
        /// The offending field name.
        field: String,
    },

    /// A field tokenizer targets a field the host's schema does not declare.
    #[error("field tokenizer targets unknown field '{field}'")]
    UnknownField {
        /// The offending field name.
        field: String,
    },

    /// A store operation failed. The host-service error is carried verbatim.
    #[error("store {operation} failed: {source}")]
    Store {
        /// The operation that failed.
        operation: StoreOperation,
        /// The underlying host-service error.
        source: BoxError,
    },
}

impl SearchError {
    /// Creates a `Store` error for a failed count.
    pub(crate) fn count(source: BoxError) -> Self {
        Self::Store {
            operation: StoreOperation::Count,
            source,
        }
    }

    /// Creates a `Store` error for a failed find.
    pub(crate) fn find(source: BoxError) -> Self {
        Self::Store {
            operation: StoreOperation::Find,
            source,
        }
    }
}
