//! Filter composition for the document-store dialect.
//!
//! A [`Filter`] is a set of per-field conditions, an optional AND-list of
//! sub-filters, and an optional native text-search directive. The empty
//! filter matches every record.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// A single per-field condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The field must equal this value exactly.
    Eq(Value),
    /// The field must match any of these values. For array-valued fields the
    /// store treats this as set intersection.
    In(Vec<Value>),
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Eq(value) => value.serialize(serializer),
            Self::In(values) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$in", values)?;
                map.end()
            }
        }
    }
}

/// A composable store filter.
///
/// `Default` is the empty filter. Builder methods take `self` by value and
/// return a new filter, so a filter held elsewhere is never mutated by
/// composition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    /// Per-field conditions, keyed by field name.
    clauses: BTreeMap<String, Condition>,
    /// Sub-filters that must all match (`$and`).
    and: Vec<Self>,
    /// Native free-text search directive (`$text.$search`).
    text: Option<String>,
}

impl Filter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the filter has no conditions at all.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.and.is_empty() && self.text.is_none()
    }

    /// Adds an equality condition, replacing any existing condition on the
    /// same field.
    #[must_use]
    pub fn with_eq(mut self, field: impl Into<String>, value: Value) -> Self {
        self.clauses.insert(field.into(), Condition::Eq(value));
        self
    }

    /// Adds a membership condition, replacing any existing condition on the
    /// same field.
    #[must_use]
    pub fn with_membership(mut self, field: impl Into<String>, values: Vec<Value>) -> Self {
        self.clauses.insert(field.into(), Condition::In(values));
        self
    }

    /// Attaches the store's native text-search directive.
    #[must_use]
    pub fn with_text(mut self, search: impl Into<String>) -> Self {
        self.text = Some(search.into());
        self
    }

    /// Composes filters into an AND-list.
    ///
    /// Sub-filters that are themselves bare AND-lists are flattened into the
    /// result, and a single-element list unwraps to that element.
    pub fn all(filters: Vec<Self>) -> Self {
        let flattened: Vec<Self> = filters
            .into_iter()
            .flat_map(|f| {
                if f.clauses.is_empty() && f.text.is_none() && !f.and.is_empty() {
                    f.and
                } else {
                    vec![f]
                }
            })
            .collect();

        match flattened.len() {
            1 => flattened.into_iter().next().unwrap(),
            _ => Self {
                and: flattened,
                ..Self::default()
            },
        }
    }

    /// Returns the condition on a field, if any.
    pub fn condition(&self, field: &str) -> Option<&Condition> {
        self.clauses.get(field)
    }

    /// Iterates over the per-field conditions.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.clauses.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the AND-list of sub-filters.
    pub fn and_list(&self) -> &[Self] {
        &self.and
    }

    /// Returns the text-search directive, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.clauses.len()
            + usize::from(!self.and.is_empty())
            + usize::from(self.text.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (field, condition) in &self.clauses {
            map.serialize_entry(field, condition)?;
        }
        if !self.and.is_empty() {
            map.serialize_entry("$and", &self.and)?;
        }
        if let Some(search) = &self.text {
            let mut directive = BTreeMap::new();
            directive.insert("$search", search);
            map.serialize_entry("$text", &directive)?;
        }
        map.end()
    }
}
