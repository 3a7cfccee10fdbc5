//! Field tokenizer configuration.
//!
//! A [`FieldTokenizers`] map declares which record fields feed the derived
//! index and how each field's raw value becomes a word list. The map is
//! built once, validated when the search façade is constructed, and
//! immutable afterwards.

use std::{collections::BTreeMap, fmt};

use serde_json::Value;

use crate::{SearchError, analyzer::tokenize_value};

/// An extraction function turning a field's raw value into a word list.
///
/// Returning `None` skips the field for the record at hand.
pub type FieldTokenizer = Box<dyn Fn(&Value) -> Option<Vec<String>> + Send + Sync>;

/// Ordered map of field name to extraction function.
#[derive(Default)]
pub struct FieldTokenizers {
    /// Extractors keyed by field name.
    map: BTreeMap<String, FieldTokenizer>,
}

impl FieldTokenizers {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extraction function for a field, replacing any previous
    /// registration for the same field.
    #[must_use]
    pub fn field<F>(mut self, name: impl Into<String>, tokenizer: F) -> Self
    where
        F: Fn(&Value) -> Option<Vec<String>> + Send + Sync + 'static,
    {
        self.map.insert(name.into(), Box::new(tokenizer));
        self
    }

    /// Registers the standard text tokenizer for a field.
    ///
    /// Handles plain string fields and arrays of strings; any other value
    /// contributes nothing.
    #[must_use]
    pub fn text_field(self, name: impl Into<String>) -> Self {
        self.field(name, |value| Some(tokenize_value(value)))
    }

    /// Number of configured fields.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no fields are configured.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over field names and their extractors in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldTokenizer)> {
        self.map.iter().map(|(name, tokenizer)| (name.as_str(), tokenizer))
    }

    /// Validates the configured field names against the host's schema.
    ///
    /// Hosts that can enumerate their schema fields should call this at
    /// startup so a tokenizer targeting a field that does not exist fails
    /// fast instead of silently indexing nothing.
    pub fn validate(&self, schema_fields: &[&str]) -> Result<(), SearchError> {
        for name in self.map.keys() {
            if !schema_fields.contains(&name.as_str()) {
                return Err(SearchError::UnknownField { field: name.clone() });
            }
        }
        Ok(())
    }

    /// Construction-time checks that need no schema knowledge.
    pub(crate) fn check(&self, index_field: &str) -> Result<(), SearchError> {
        if self.map.is_empty() {
            return Err(SearchError::EmptyTokenizerMap);
        }
        for name in self.map.keys() {
            if name.is_empty() {
                return Err(SearchError::EmptyFieldName);
            }
            if name == index_field {
                return Err(SearchError::ReservedField { field: name.clone() });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FieldTokenizers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.map.keys()).finish()
    }
}
