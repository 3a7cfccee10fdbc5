//! Query construction for token-list mode.
//!
//! Translates normalized keywords into membership conditions on the derived
//! index field. Multiple keywords compose as an AND-list: a record must
//! carry every keyword's stem, even though each membership clause only
//! tests one value.

use serde_json::Value;
use sift_filter::Filter;

use crate::Analyzer;

/// Builds a token-list search filter from keywords and a base filter.
///
/// Keywords are normalized through the analyzer first, so the query
/// vocabulary matches the stored index. Zero keywords return the base
/// filter unchanged; one keyword merges a single membership condition into
/// it; more than one wraps the base and one membership condition per
/// keyword into an AND-list.
pub fn keyword_query(
    analyzer: &Analyzer,
    index_field: &str,
    keywords: &[String],
    base: Filter,
) -> Filter {
    let stems = analyzer.stem(keywords);
    match stems.len() {
        0 => base,
        1 => base.with_membership(
            index_field,
            stems.into_iter().map(Value::String).collect(),
        ),
        _ => {
            let mut parts = Vec::with_capacity(stems.len() + 1);
            parts.push(base);
            parts.extend(stems.into_iter().map(|stem| {
                Filter::new().with_membership(index_field, vec![Value::String(stem)])
            }));
            Filter::all(parts)
        }
    }
}
