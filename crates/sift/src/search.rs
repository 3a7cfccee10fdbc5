//! The search façade.
//!
//! [`Search`] ties the pieces together: it validates configuration, installs
//! the lifecycle hooks (token-list mode), builds the mode's filter from
//! search input, and runs count + find against the host service. Optional
//! arguments are an explicit method family rather than runtime overloading:
//! [`Search::search`] for the common case, [`Search::search_filtered`] to
//! narrow by a base filter, and [`Search::search_with`] for full control
//! over find options.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use sift_filter::{Filter, FindOptions};
use tracing::debug;

use crate::{
    Analyzer, FieldTokenizers, HostService, IndexBuilder, Record, SearchConfig, SearchError,
    analyzer::tokenize,
    hooks,
    index::strip_index,
    query::keyword_query,
    text::{extend_options, text_query},
};

/// Search input accepted by both operating modes.
///
/// Token-list mode tokenizes free text into keywords; free-text mode joins
/// keyword lists into one space-separated string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// Free text, e.g. a query string typed by a user.
    Text(String),
    /// An explicit list of keywords.
    Keywords(Vec<String>),
}

impl SearchInput {
    /// The input as a keyword list.
    pub(crate) fn keyword_list(&self) -> Vec<String> {
        match self {
            Self::Text(text) => tokenize(text),
            Self::Keywords(keywords) => keywords.clone(),
        }
    }

    /// The input as one search string.
    pub(crate) fn joined(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Keywords(keywords) => keywords.join(" "),
        }
    }
}

impl From<&str> for SearchInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SearchInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for SearchInput {
    fn from(keywords: Vec<String>) -> Self {
        Self::Keywords(keywords)
    }
}

impl From<Vec<&str>> for SearchInput {
    fn from(keywords: Vec<&str>) -> Self {
        Self::Keywords(keywords.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for SearchInput {
    fn from(keywords: &[&str]) -> Self {
        Self::Keywords(keywords.iter().map(ToString::to_string).collect())
    }
}

/// The outcome of a search: matched records plus the total matching count.
///
/// The count comes from a separate store operation and may differ from the
/// page of records under concurrent writes. Records are in the host's
/// external representation with the derived index field stripped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Matching records, shaped by the find options.
    pub records: Vec<Record>,
    /// Total number of matching records.
    pub total: u64,
}

/// How the façade indexes and queries.
enum Mode {
    /// Explicit stored stem index matched with membership queries.
    TokenList {
        /// Shared with the installed lifecycle hooks.
        analyzer: Arc<Analyzer>,
    },
    /// The store's own text index via the native text directive.
    FreeText,
}

/// Keyword search over a host CRUD service.
pub struct Search<S> {
    /// The augmented host service.
    service: Arc<S>,
    /// Index field name and stemmer language.
    config: SearchConfig,
    /// Operating mode.
    mode: Mode,
}

impl<S> fmt::Debug for Search<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            Mode::TokenList { .. } => "TokenList",
            Mode::FreeText => "FreeText",
        };
        f.debug_struct("Search")
            .field("config", &self.config)
            .field("mode", &mode)
            .finish_non_exhaustive()
    }
}

impl<S: HostService> Search<S> {
    /// Creates a token-list search with default configuration.
    ///
    /// Validates the tokenizer map, then installs pre-create and pre-update
    /// hooks on the service so the derived index tracks every write.
    pub fn token_list(service: Arc<S>, tokenizers: FieldTokenizers) -> Result<Self, SearchError> {
        Self::token_list_with_config(service, tokenizers, SearchConfig::default())
    }

    /// Creates a token-list search with explicit configuration.
    pub fn token_list_with_config(
        service: Arc<S>,
        tokenizers: FieldTokenizers,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        tokenizers.check(&config.index_field)?;
        let analyzer = Arc::new(Analyzer::new(&config.language)?);
        let builder = Arc::new(IndexBuilder::new(
            Arc::clone(&analyzer),
            tokenizers,
            config.index_field.clone(),
        ));
        hooks::install(service.as_ref(), &builder);
        Ok(Self {
            service,
            config,
            mode: Mode::TokenList { analyzer },
        })
    }

    /// Creates a free-text search with default configuration.
    ///
    /// No field is stored and no hooks are installed; matching is delegated
    /// to the store's own text index.
    pub fn free_text(service: Arc<S>) -> Self {
        Self::free_text_with_config(service, SearchConfig::default())
    }

    /// Creates a free-text search with explicit configuration.
    pub fn free_text_with_config(service: Arc<S>, config: SearchConfig) -> Self {
        Self {
            service,
            config,
            mode: Mode::FreeText,
        }
    }

    /// Name of the derived index field.
    pub fn index_field(&self) -> &str {
        &self.config.index_field
    }

    /// Builds the store filter this search would execute.
    ///
    /// Exposed so hosts and tests can inspect query construction without
    /// touching the store.
    pub fn query(&self, input: impl Into<SearchInput>, base: Filter) -> Filter {
        self.build_query(&input.into(), base)
    }

    /// Searches with an empty base filter and default options.
    pub fn search(&self, input: impl Into<SearchInput>) -> Result<SearchResult, SearchError> {
        self.search_with(input, Filter::new(), FindOptions::new())
    }

    /// Searches, narrowing results with a caller-supplied base filter.
    pub fn search_filtered(
        &self,
        input: impl Into<SearchInput>,
        filter: Filter,
    ) -> Result<SearchResult, SearchError> {
        self.search_with(input, filter, FindOptions::new())
    }

    /// Searches with a base filter and explicit find options.
    ///
    /// Runs a count followed by a find with the same filter. A failed count
    /// returns immediately without touching the store again; a failed find
    /// likewise surfaces at once. Either way the error carries the host
    /// service's failure verbatim.
    pub fn search_with(
        &self,
        input: impl Into<SearchInput>,
        filter: Filter,
        options: FindOptions,
    ) -> Result<SearchResult, SearchError> {
        let input = input.into();
        let options = match &self.mode {
            Mode::FreeText => extend_options(options),
            Mode::TokenList { .. } => options,
        };
        let query = self.build_query(&input, filter);
        debug!(filter = ?query, "executing search");

        let total = self.service.count(&query).map_err(SearchError::count)?;
        let mut records = self
            .service
            .find(&query, &options)
            .map_err(SearchError::find)?;
        for record in &mut records {
            strip_index(record, &self.config.index_field);
        }
        debug!(total, returned = records.len(), "search complete");

        Ok(SearchResult { records, total })
    }

    /// Counts matching records without retrieving them.
    pub fn count(
        &self,
        input: impl Into<SearchInput>,
        filter: Filter,
    ) -> Result<u64, SearchError> {
        let query = self.build_query(&input.into(), filter);
        self.service.count(&query).map_err(SearchError::count)
    }

    /// Dispatches query construction to the operating mode.
    fn build_query(&self, input: &SearchInput, base: Filter) -> Filter {
        match &self.mode {
            Mode::TokenList { analyzer } => keyword_query(
                analyzer,
                &self.config.index_field,
                &input.keyword_list(),
                base,
            ),
            Mode::FreeText => text_query(input, base),
        }
    }
}
