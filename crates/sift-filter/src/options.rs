//! Find options for the document-store dialect.
//!
//! Options control paging, ordering, and field selection of a find call.
//! Field selection supports both plain include/exclude flags and the store's
//! relevance-score meta-projection.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Sort direction for a single sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order.
    Ascending,
    /// Descending order.
    Descending,
}

impl Serialize for SortDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ascending => serializer.serialize_i8(1),
            Self::Descending => serializer.serialize_i8(-1),
        }
    }
}

/// A field-selection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Plain include (`true`) or exclude (`false`) flag.
    Flag(bool),
    /// The store's relevance-score meta-projection.
    TextScore,
}

impl Serialize for Projection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag(include) => serializer.serialize_bool(*include),
            Self::TextScore => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$meta", "textScore")?;
                map.end()
            }
        }
    }
}

/// Options for a find call: paging, ordering, and field selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    /// Number of records to skip.
    pub skip: Option<u64>,
    /// Maximum number of records to return.
    pub limit: Option<u64>,
    /// Sort keys in application order.
    pub sort: BTreeMap<String, SortDirection>,
    /// Field-selection entries.
    pub fields: BTreeMap<String, Projection>,
}

impl FindOptions {
    /// Creates default options: no paging, no ordering, all fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of records to skip.
    #[must_use]
    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sets the maximum number of records to return.
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Adds a sort key.
    #[must_use]
    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.insert(field.into(), direction);
        self
    }

    /// Adds a field-selection entry, replacing any existing entry for the
    /// same field.
    #[must_use]
    pub fn with_projection(mut self, field: impl Into<String>, projection: Projection) -> Self {
        self.fields.insert(field.into(), projection);
        self
    }
}

impl Serialize for FindOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = usize::from(self.skip.is_some())
            + usize::from(self.limit.is_some())
            + usize::from(!self.sort.is_empty())
            + usize::from(!self.fields.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(skip) = self.skip {
            map.serialize_entry("skip", &skip)?;
        }
        if let Some(limit) = self.limit {
            map.serialize_entry("limit", &limit)?;
        }
        if !self.sort.is_empty() {
            map.serialize_entry("sort", &self.sort)?;
        }
        if !self.fields.is_empty() {
            map.serialize_entry("fields", &self.fields)?;
        }
        map.end()
    }
}
