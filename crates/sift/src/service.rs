//! The host CRUD service seam.
//!
//! sift augments a record service it does not own. [`HostService`] is the
//! contract that service must satisfy: lifecycle hook registration plus
//! filtered count and find. Store errors cross this seam verbatim as
//! [`BoxError`]; sift never swallows or retries them.

use serde_json::Value;
use sift_filter::{Filter, FindOptions};

use crate::{
    error::BoxError,
    hooks::{PreHook, WriteEvent},
};

/// A record as exchanged with the host service: named fields with JSON
/// values.
pub type Record = serde_json::Map<String, Value>;

/// Contract the host CRUD service must expose.
///
/// `pre` hooks run synchronously before the host persists a record; a hook
/// returning an error aborts the write. `find` results follow the host's
/// external record representation, which never includes the derived index
/// field.
pub trait HostService {
    /// Registers a hook to run before the given write event persists.
    fn pre(&self, event: WriteEvent, hook: PreHook);

    /// Counts records matching a filter.
    fn count(&self, filter: &Filter) -> Result<u64, BoxError>;

    /// Retrieves records matching a filter, shaped by the given options.
    fn find(&self, filter: &Filter, options: &FindOptions) -> Result<Vec<Record>, BoxError>;
}
