//! Derived index construction.
//!
//! The [`IndexBuilder`] maps a record's configured fields through their
//! extraction functions into one flat word list, normalizes it, and writes
//! the result to the derived index field. Application is an explicit
//! transform returning a new record value; the index is recomputed in full
//! on every write that passes through it.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::{Analyzer, FieldTokenizers, Record};

/// Builds the derived index value for records.
pub struct IndexBuilder {
    /// Normalizes extracted word lists.
    analyzer: Arc<Analyzer>,
    /// Field extraction configuration, fixed at construction.
    tokenizers: FieldTokenizers,
    /// Name of the derived index field.
    index_field: String,
}

impl IndexBuilder {
    /// Creates a builder over a validated tokenizer map.
    pub(crate) fn new(
        analyzer: Arc<Analyzer>,
        tokenizers: FieldTokenizers,
        index_field: String,
    ) -> Self {
        Self {
            analyzer,
            tokenizers,
            index_field,
        }
    }

    /// Name of the derived index field this builder writes.
    pub fn index_field(&self) -> &str {
        &self.index_field
    }

    /// Computes the index entries for a record.
    ///
    /// Every configured extractor runs against its field (missing fields are
    /// presented as null); extractors returning `None` contribute nothing.
    /// The concatenated word list is stemmed and deduplicated, so the result
    /// does not depend on field iteration order beyond first-occurrence
    /// ordering of stems.
    pub fn entries(&self, record: &Record) -> Vec<String> {
        let mut words = Vec::new();
        for (field, tokenizer) in self.tokenizers.iter() {
            let value = record.get(field).unwrap_or(&Value::Null);
            if let Some(mut list) = tokenizer(value) {
                words.append(&mut list);
            }
        }
        self.analyzer.stem(words)
    }

    /// Returns the record with the derived index field recomputed.
    pub fn apply(&self, mut record: Record) -> Record {
        let entries = self.entries(&record);
        debug!(
            field = %self.index_field,
            entries = entries.len(),
            "recomputed derived index"
        );
        record.insert(
            self.index_field.clone(),
            Value::Array(entries.into_iter().map(Value::String).collect()),
        );
        record
    }
}

/// Removes the derived index field from a record's external representation.
pub fn strip_index(record: &mut Record, index_field: &str) {
    record.remove(index_field);
}
