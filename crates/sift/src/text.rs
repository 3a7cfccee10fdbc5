//! Query construction for free-text mode.
//!
//! Free-text mode keeps no derived field; it delegates matching to the
//! store's own text index via the native text directive and asks the store
//! to project its relevance score into the results.

use sift_filter::{Filter, FindOptions, Projection};

use crate::SearchInput;

/// Field under which the store's relevance score is projected.
const SCORE_FIELD: &str = "score";

/// Builds a free-text search filter from search input and a base filter.
///
/// Keyword lists are joined into one space-separated string. A non-empty
/// string attaches the store's text directive to the base filter; an empty
/// string returns the base filter verbatim, since the store's text search
/// does not tolerate empty search strings.
pub fn text_query(input: &SearchInput, base: Filter) -> Filter {
    let search = input.joined();
    if search.is_empty() {
        base
    } else {
        base.with_text(search)
    }
}

/// Adds the relevance-score projection to find options.
///
/// Existing field-selection entries are preserved; only the score entry is
/// set.
pub fn extend_options(options: FindOptions) -> FindOptions {
    options.with_projection(SCORE_FIELD, Projection::TextScore)
}
