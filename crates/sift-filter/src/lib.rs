//! Document-store filter and options dialect for sift search.
//!
//! This crate models the filter language of the document store that sift
//! delegates to:
//!
//! - **Equality conditions**: `field == value`
//! - **Membership conditions**: `field` matches any of a set of values
//! - **AND composition**: a list of sub-filters that must all match
//! - **Text directive**: the store's native free-text search
//!
//! Filters are value types: composing a filter never mutates one the caller
//! still holds. Serialization produces the store's wire dialect, e.g.:
//!
//! ```
//! use serde_json::json;
//! use sift_filter::Filter;
//!
//! let filter = Filter::new()
//!     .with_eq("author", json!("Bob"))
//!     .with_membership("tags", vec![json!("rust")]);
//!
//! assert_eq!(
//!     serde_json::to_value(&filter).unwrap(),
//!     json!({ "author": "Bob", "tags": { "$in": ["rust"] } })
//! );
//! ```

#![warn(missing_docs)]

mod filter;
mod options;

pub use filter::{Condition, Filter};
pub use options::{FindOptions, Projection, SortDirection};
