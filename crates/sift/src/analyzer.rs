//! Text analysis for the sift search core.
//!
//! Implements a three-stage normalization pipeline:
//! 1. [`tokenize`] - splits on non-alphanumeric characters
//! 2. Lowercasing
//! 3. Snowball stemming with order-preserving deduplication
//!
//! The same pipeline is applied when building the stored index and when
//! normalizing incoming search keywords, so the two vocabularies match.

use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};
use serde_json::Value;

use crate::SearchError;

/// Parses a stemmer language string into a stemming [`Algorithm`].
///
/// Supports lowercase language names matching the Snowball algorithm set.
/// Returns an error if the language is not recognized.
pub fn parse_language(name: &str) -> Result<Algorithm, SearchError> {
    match name.to_lowercase().as_str() {
        "arabic" => Ok(Algorithm::Arabic),
        "danish" => Ok(Algorithm::Danish),
        "dutch" => Ok(Algorithm::Dutch),
        "english" => Ok(Algorithm::English),
        "finnish" => Ok(Algorithm::Finnish),
        "french" => Ok(Algorithm::French),
        "german" => Ok(Algorithm::German),
        "greek" => Ok(Algorithm::Greek),
        "hungarian" => Ok(Algorithm::Hungarian),
        "italian" => Ok(Algorithm::Italian),
        "norwegian" => Ok(Algorithm::Norwegian),
        "portuguese" => Ok(Algorithm::Portuguese),
        "romanian" => Ok(Algorithm::Romanian),
        "russian" => Ok(Algorithm::Russian),
        "spanish" => Ok(Algorithm::Spanish),
        "swedish" => Ok(Algorithm::Swedish),
        "tamil" => Ok(Algorithm::Tamil),
        "turkish" => Ok(Algorithm::Turkish),
        other => Err(SearchError::InvalidLanguage(other.to_string())),
    }
}

/// Splits text into word tokens.
///
/// Splits on any non-alphanumeric character and discards empty tokens, so
/// every returned token is non-empty and purely alphanumeric. Case is
/// preserved; lowercasing happens during stemming. Deterministic and
/// side-effect-free.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenizes a record field value.
///
/// This is the standard field extractor: strings are tokenized, arrays
/// tokenize their string elements, and any other value yields an empty list
/// rather than an error.
pub fn tokenize_value(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => tokenize(text),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .flat_map(tokenize)
            .collect(),
        _ => Vec::new(),
    }
}

/// Normalizes word lists into index entries and query keywords.
///
/// Owns a Snowball stemmer for a fixed language. An analyzer is explicitly
/// constructed and injectable; it holds no shared mutable state, so a single
/// instance can serve concurrent searches.
pub struct Analyzer {
    /// Snowball stemmer for the configured language.
    stemmer: Stemmer,
}

impl Analyzer {
    /// Creates an analyzer from a language name string.
    pub fn new(language: &str) -> Result<Self, SearchError> {
        Ok(Self::from_algorithm(parse_language(language)?))
    }

    /// Creates an analyzer for a specific stemming algorithm.
    pub fn from_algorithm(algorithm: Algorithm) -> Self {
        Self {
            stemmer: Stemmer::create(algorithm),
        }
    }

    /// Reduces words to lower-case stems with first-occurrence deduplication.
    ///
    /// Output order follows the first occurrence of each stem in the input.
    /// Idempotent: stemming an already-stemmed, deduplicated list yields the
    /// same list.
    pub fn stem<I>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut seen = HashSet::new();
        words
            .into_iter()
            .map(|word| {
                self.stemmer
                    .stem(&word.as_ref().to_lowercase())
                    .into_owned()
            })
            .filter(|stem| !stem.is_empty() && seen.insert(stem.clone()))
            .collect()
    }

    /// Tokenizes and stems free text in one step.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.stem(tokenize(text))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::from_algorithm(Algorithm::English)
    }
}
