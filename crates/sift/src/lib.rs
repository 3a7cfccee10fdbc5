//! Keyword text search delegate for CRUD record services.
//!
//! This crate augments an external CRUD record service with keyword search.
//! It maintains a hidden per-record field of normalized word stems, kept
//! consistent by intercepting the service's pre-create and pre-update
//! lifecycle, and translates search input into store filters. The service
//! itself, the document store, and any HTTP/CLI wiring remain the host's
//! concern.
//!
//! Two operating modes share one façade:
//!
//! - **Token-list mode**: an explicit stemmed-token index field is stored on
//!   each record and matched with membership queries. Requires a
//!   [`FieldTokenizers`] map describing which fields feed the index.
//! - **Free-text mode**: no stored field; queries delegate to the store's
//!   own text index via its native text directive, and find options are
//!   extended with a relevance-score projection.
//!
//! # Example
//!
//! ```
//! use sift::{Analyzer, FieldTokenizers, tokenize};
//!
//! // Fields feeding the index: plain text fields use the standard
//! // tokenizer, nested structures get a custom extractor.
//! let tokenizers = FieldTokenizers::new()
//!     .text_field("title")
//!     .text_field("body")
//!     .field("tags", |value| {
//!         let tags = value.as_array()?;
//!         Some(
//!             tags.iter()
//!                 .filter_map(|t| t.get("tag")?.as_str())
//!                 .map(String::from)
//!                 .collect(),
//!         )
//!     });
//! assert_eq!(tokenizers.len(), 3);
//!
//! // The analyzer normalizes both index entries and incoming keywords.
//! let analyzer = Analyzer::default();
//! assert_eq!(
//!     analyzer.stem(tokenize("Tremendous titles")),
//!     vec!["tremend", "titl"]
//! );
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod fields;
mod hooks;
mod index;
mod query;
mod search;
mod service;
mod text;

pub use analyzer::{Analyzer, parse_language, tokenize, tokenize_value};
pub use config::{DEFAULT_INDEX_FIELD, SearchConfig};
pub use error::{BoxError, SearchError, StoreOperation};
pub use fields::{FieldTokenizer, FieldTokenizers};
pub use hooks::{PreHook, WriteEvent};
pub use index::{IndexBuilder, strip_index};
pub use query::keyword_query;
pub use rust_stemmers::Algorithm;
pub use search::{Search, SearchInput, SearchResult};
pub use service::{HostService, Record};
pub use text::{extend_options, text_query};
