//! Lifecycle interception.
//!
//! Installs the index transform as a pre-create and pre-update hook on the
//! host service, so the derived index is recomputed on every write before it
//! reaches the store.

use std::sync::Arc;

use tracing::trace;

use crate::{HostService, IndexBuilder, Record, error::BoxError};

/// Write lifecycle events a hook can intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteEvent {
    /// A new record is about to be persisted.
    Create,
    /// An existing record is about to be replaced with its merged state.
    Update,
}

/// A pre-write hook: receives the full proposed record state and returns the
/// (possibly transformed) record to persist, or an error to abort the write.
pub type PreHook = Box<dyn Fn(Record) -> Result<Record, BoxError> + Send + Sync>;

/// Registers the index transform for both write events.
///
/// The transform itself cannot fail once the tokenizer map has validated, so
/// installed hooks never abort a write.
pub(crate) fn install<S: HostService>(service: &S, builder: &Arc<IndexBuilder>) {
    for event in [WriteEvent::Create, WriteEvent::Update] {
        let builder = Arc::clone(builder);
        service.pre(
            event,
            Box::new(move |record| {
                trace!(?event, "applying index transform");
                Ok(builder.apply(record))
            }),
        );
    }
}
