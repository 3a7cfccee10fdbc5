//! Search configuration.

use serde::{Deserialize, Serialize};

/// Default name of the derived index field stored on each record.
pub const DEFAULT_INDEX_FIELD: &str = "_textIndex";

/// Configuration for a search façade.
///
/// The defaults match what most hosts want: an English stemmer and the
/// conventional hidden index field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Name of the derived index field on persisted records. Must not
    /// collide with any tokenized field.
    pub index_field: String,
    /// Stemmer language name, parsed with
    /// [`parse_language`](crate::parse_language).
    pub language: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_field: DEFAULT_INDEX_FIELD.to_string(),
            language: "english".to_string(),
        }
    }
}
